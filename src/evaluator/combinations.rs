/// Iterator over every way of choosing 5 indices out of `n`, in
/// lexicographic order: C(5,5) = 1, C(6,5) = 6, C(7,5) = 21.
pub struct FiveCardSubsets {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl FiveCardSubsets {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for FiveCardSubsets {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Find the rightmost index that still has room to move
        let mut i = 5;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}
