use std::ops::{Index, IndexMut, Mul};

pub const P: u64 = 1_000_000_007;

pub const N: usize = 4;

/// 4x4 matrix over integers mod `P`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mat4(pub [[u64; N]; N]);

impl Index<[usize; 2]> for Mat4 {
    type Output = u64;

    #[inline(always)]
    fn index(&self, index: [usize; 2]) -> &Self::Output {
        &self.0[index[0]][index[1]]
    }
}

impl IndexMut<[usize; 2]> for Mat4 {
    #[inline(always)]
    fn index_mut(&mut self, index: [usize; 2]) -> &mut Self::Output {
        &mut self.0[index[0]][index[1]]
    }
}

impl Mat4 {
    pub const ZERO: Self = Self([[0; N]; N]);

    pub const fn id() -> Self {
        let mut res = Self::ZERO;
        let mut i = 0;
        while i < N {
            res.0[i][i] = 1;
            i += 1;
        }
        res
    }

    /// Entries must already lie in `[0, P)`.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let mut res = Self::ZERO;
        for i in 0..N {
            for j in 0..N {
                // reduce after every term; acc < P + (P - 1)^2 < 2^64
                let mut acc = 0;
                for k in 0..N {
                    acc += self[[i, k]] * rhs[[k, j]];
                    acc %= P;
                }
                res[[i, j]] = acc;
            }
        }
        res
    }

    pub fn pow(&self, mut exp: u64) -> Self {
        let mut res = Self::id();
        let mut base = *self;
        while exp > 0 {
            if exp & 1 == 1 {
                res = res.mul_mat(&base);
            }
            base = base.mul_mat(&base);
            exp >>= 1;
        }
        res
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mat_strategy() -> impl Strategy<Value = Mat4> {
        prop::array::uniform4(prop::array::uniform4(0..P)).prop_map(Mat4)
    }

    fn naive_entry(a: &Mat4, b: &Mat4, i: usize, j: usize) -> u64 {
        let sum: u128 = (0..N)
            .map(|k| a[[i, k]] as u128 * b[[k, j]] as u128)
            .sum();
        (sum % P as u128) as u64
    }

    #[test]
    fn identity() {
        let a = Mat4([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]);
        assert_eq!(a * Mat4::id(), a);
        assert_eq!(Mat4::id() * a, a);
        assert_eq!(a.pow(0), Mat4::id());
        assert_eq!(a.pow(1), a);
    }

    #[test]
    fn mul_near_modulus() {
        let a = Mat4([[P - 1; N]; N]);
        // (P - 1)^2 = 1 mod P, four terms per entry
        assert_eq!(a * a, Mat4([[4; N]; N]));
    }

    #[test]
    fn pow_small() {
        let a = Mat4([[1, 1, 0, 0], [1, 0, 0, 0], [0, 0, 1, 0], [0, 0, 0, 2]]);
        let a10 = a.pow(10);
        // fibonacci block
        assert_eq!([a10[[0, 0]], a10[[0, 1]], a10[[1, 1]]], [89, 55, 34]);
        assert_eq!(a10[[2, 2]], 1);
        assert_eq!(a10[[3, 3]], 1024);
    }

    #[test]
    fn pow_large_exponent() {
        let a = Mat4([[2, 0, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 1]]);
        // 2^(P - 1) = 1 mod P
        let res = a.pow(P - 1);
        assert_eq!(res[[0, 0]], 1);
        assert_eq!(res[[2, 2]], 0);
        assert_eq!(a.pow(u64::MAX)[[3, 3]], 1);
    }

    proptest! {
        #[test]
        fn mul_matches_sum(a in mat_strategy(), b in mat_strategy()) {
            let res = a * b;
            for i in 0..N {
                for j in 0..N {
                    prop_assert_eq!(res[[i, j]], naive_entry(&a, &b, i, j));
                }
            }
        }

        #[test]
        fn mul_assoc(a in mat_strategy(), b in mat_strategy(), c in mat_strategy()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn pow_adds_exponents(a in mat_strategy(), m in 1u64..200, n in 1u64..200) {
            prop_assert_eq!(a.pow(m + n), a.pow(m) * a.pow(n));
        }

        #[test]
        fn pow_matches_repeated_mul(a in mat_strategy(), e in 0u64..20) {
            let mut expected = Mat4::id();
            for _ in 0..e {
                expected = expected * a;
            }
            prop_assert_eq!(a.pow(e), expected);
        }
    }
}
