/// A rectangular 2D grid stored row-major.
///
/// Unlike a world map this grid does not wrap: reads outside the rectangle
/// return `None` and writes outside it are dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }
}

impl<T> Tilemap<T> {
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|idx| &self.data[idx])
    }

    /// Store `value` at `(x, y)`. Returns false (and stores nothing) when the
    /// coordinate is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.data[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut map = Tilemap::new_with(4, 3, 0u8);
        assert!(map.set(3, 2, 9));
        assert_eq!(map.get(3, 2), Some(&9));
        assert_eq!(map.get(0, 0), Some(&0));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut map: Tilemap<u8> = Tilemap::new(4, 3);
        let before = map.clone();

        assert!(!map.set(4, 0, 1));
        assert!(!map.set(0, 3, 1));
        assert!(!map.set(usize::MAX, usize::MAX, 1));

        assert_eq!(map, before);
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.get(0, 3), None);
    }

    #[test]
    fn test_no_horizontal_wrap() {
        let mut map = Tilemap::new_with(2, 2, 'a');
        map.set(2, 0, 'b');
        assert_eq!(map.get(0, 0), Some(&'a'));
    }

    #[test]
    fn test_iter_visits_row_major() {
        let map = Tilemap::new_with(3, 2, ());
        let coords: Vec<_> = map.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
