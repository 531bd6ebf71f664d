#![allow(non_snake_case)]

use crate::{DenseMatrix, DenseStorageMatrix, MultiplyMat, ScalarT, ShapedMatrix};
use num_traits::Zero;

impl<S, T> MultiplyMat for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: ScalarT,
{
    type T = T;
    // implements self = A * B
    fn matmul<MATA, MATB>(&mut self, A: &MATA, B: &MATB) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());
        // the result must already be allocated to the full output extent
        assert!(self.data().len() == self.nrows() * self.ncols());

        let (m, n) = self.size();
        let inner = A.ncols();

        // cache-naive triple loop.  All element access goes through the
        // transpose-aware index mapping, so either operand may be in
        // transposed orientation transparently.
        for i in 0..m {
            for j in 0..n {
                // the result may hold stale data, so the accumulator starts
                // from zero rather than from the current cell
                let mut sum = T::zero();
                for k in 0..inner {
                    sum += A[(i, k)] * B[(k, j)];
                }
                self[(i, j)] = sum;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{DenseMatrix, Matrix, MultiplyMat, ShapedMatrix};

    #[test]
    fn test_matmul() {
        let (m, n, k) = (2, 4, 3);
        let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = vec![
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
        ];

        let A = Matrix::new_from_slice((m, k), &a);
        let B = Matrix::new_from_slice((k, n), &b);
        let mut C = Matrix::<f64>::try_new((m, n)).unwrap();
        C.matmul(&A, &B);

        assert!(C.data() == vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);

        // transposed multiply into a stale result
        let mut At = Matrix::new_from_slice((m, k), &a);
        let mut Bt = Matrix::new_from_slice((k, n), &b);
        At.transpose();
        Bt.transpose();
        let mut C = Matrix::new_from_slice((n, m), &[9.0; 8]);
        C.matmul(&Bt, &At);

        assert!(C.data() == vec![38.0, 83.0, 44.0, 98.0, 50.0, 113.0, 56.0, 128.0]);
    }

    #[test]
    fn test_matmul_empty_result() {
        let A = Matrix::<f64>::try_new((0, 3)).unwrap();
        let B = Matrix::<f64>::try_new((3, 0)).unwrap();
        let mut C = Matrix::<f64>::default();
        C.matmul(&A, &B);
        assert_eq!(C.size(), (0, 0));
    }

    #[test]
    #[should_panic]
    fn test_matmul_inner_dimension_mismatch() {
        let A = Matrix::<f64>::try_new((2, 3)).unwrap();
        let B = Matrix::<f64>::try_new((2, 3)).unwrap();
        let mut C = Matrix::<f64>::try_new((2, 3)).unwrap();
        C.matmul(&A, &B);
    }

    #[test]
    #[should_panic]
    fn test_matmul_unallocated_result() {
        let A = Matrix::<f64>::try_new((2, 3)).unwrap();
        let B = Matrix::<f64>::try_new((3, 2)).unwrap();
        let mut C = Matrix::<f64>::default();
        C.matmul(&A, &B);
    }
}
