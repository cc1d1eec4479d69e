use celsim::{MatrixError, SquareMatrix};

fn sample(size: usize, seed: i64) -> SquareMatrix {
    let mut m = SquareMatrix::new(size);
    for i in 0..size {
        for j in 0..size {
            m[(i, j)] = (seed * (i as i64 + 1) - 3 * j as i64) % 7;
        }
    }
    m
}

#[test]
fn multiply_by_identity_is_noop() {
    for n in [1, 2, 5] {
        let a = sample(n, 3);
        let i = SquareMatrix::identity(n);
        assert_eq!(a.multiply(&i).unwrap(), a);
        assert_eq!(i.multiply(&a).unwrap(), a);
    }
}

#[test]
fn multiply_is_associative() {
    let a = sample(4, 2);
    let b = sample(4, 5);
    let c = sample(4, -3);

    let left = a.multiply(&b).unwrap().multiply(&c).unwrap();
    let right = a.multiply(&b.multiply(&c).unwrap()).unwrap();

    assert_eq!(left, right);
}

#[test]
fn multiply_known_product() {
    let a = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = SquareMatrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();

    let c = a.multiply(&b).unwrap();

    assert_eq!(c, SquareMatrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap());
    assert_eq!(c[1], [43, 50]);
    assert_eq!(c.get(0, 1), Some(22));
}

#[test]
fn multiply_rejects_size_mismatch() {
    let err = SquareMatrix::new(2).multiply(&SquareMatrix::new(3)).unwrap_err();
    assert_eq!(err, MatrixError::SizeMismatch { left: 2, right: 3 });
}

#[test]
fn from_rows_rejects_ragged_input() {
    let err = SquareMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(err, MatrixError::NotSquare { rows: 2, row: 1, len: 1 });
}

#[test]
fn set_and_get_are_bounds_checked() {
    let mut m = SquareMatrix::new(2);
    m.set(1, 0, 9).unwrap();

    assert_eq!(m.get(1, 0), Some(9));
    assert_eq!(m[(1, 0)], 9);
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.set(0, 2, 1), Err(MatrixError::IndexOutOfBounds { i: 0, j: 2, size: 2 }));
    assert_eq!(m.size(), 2);
}

#[test]
#[should_panic]
fn row_index_out_of_bounds_panics() {
    let m = SquareMatrix::new(2);
    let _ = &m[2];
}

#[test]
fn multiply_reports_product_overflow() {
    let a = SquareMatrix::from_rows(vec![vec![i64::MAX, i64::MAX], vec![1, 1]]).unwrap();
    let two = SquareMatrix::from_rows(vec![vec![2, 0], vec![0, 2]]).unwrap();

    assert_eq!(a.multiply(&two).unwrap_err(), MatrixError::Overflow { i: 0, j: 0 });
}

#[test]
fn multiply_reports_sum_overflow() {
    let a = SquareMatrix::from_rows(vec![vec![1, 1], vec![0, 0]]).unwrap();
    let b = SquareMatrix::from_rows(vec![vec![0, i64::MAX], vec![0, 1]]).unwrap();

    // (0, 0) is 0 and fine, (0, 1) is i64::MAX + 1
    assert_eq!(a.multiply(&b).unwrap_err(), MatrixError::Overflow { i: 0, j: 1 });
}
