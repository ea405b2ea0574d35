/// Furthest-reaching x per diagonal `k = x - y`, indexable over `[-size, size]`.
#[derive(Debug, Clone)]
pub(crate) struct DiagonalArray {
    data: Vec<isize>,
    offset: isize,
}

impl DiagonalArray {
    pub(crate) fn new(size: usize) -> Self {
        DiagonalArray {
            data: vec![0; 2 * size + 1],
            offset: size as isize,
        }
    }

    pub(crate) fn get(&self, k: isize) -> isize {
        self.data[(k + self.offset) as usize]
    }

    pub(crate) fn set(&mut self, k: isize, x: isize) {
        self.data[(k + self.offset) as usize] = x;
    }
}
