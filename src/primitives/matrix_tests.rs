pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::<f32>::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_get_set() {
    let mut m = Matrix::<f32>::zeros(2, 2);
    m.set(1, 0, 7.5);
    assert!((m.get(1, 0) - 7.5).abs() < 1e-6);
    assert!((m.get(0, 0) - 0.0).abs() < 1e-6);
}

#[test]
fn test_row() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let row = m.row(1);
    assert_eq!(row.len(), 3);
    assert!((row[0] - 4.0).abs() < 1e-6);
    assert!((row[1] - 5.0).abs() < 1e-6);
    assert!((row[2] - 6.0).abs() < 1e-6);
}

#[test]
fn test_push_row() {
    let mut m = Matrix::<f32>::zeros(1, 3);
    m.push_row(&[1.0, 2.0, 3.0]).expect("row length matches cols");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(1, 1) - 2.0).abs() < 1e-6);
    // first row untouched
    assert!((m.get(0, 1) - 0.0).abs() < 1e-6);
}

#[test]
fn test_push_row_length_error() {
    let mut m = Matrix::<f32>::zeros(1, 3);
    assert!(m.push_row(&[1.0, 2.0]).is_err());
    assert_eq!(m.shape(), (1, 3));
}

#[test]
fn test_set_row() {
    let mut m = Matrix::<f32>::zeros(2, 2);
    m.set_row(1, &[3.0, 4.0]).expect("row length matches cols");
    assert!((m.get(1, 0) - 3.0).abs() < 1e-6);
    assert!((m.get(1, 1) - 4.0).abs() < 1e-6);
    assert!(m.set_row(2, &[1.0, 1.0]).is_err());
    assert!(m.set_row(0, &[1.0]).is_err());
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert!((t.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((t.get(0, 1) - 4.0).abs() < 1e-6);
    assert!((t.get(2, 1) - 6.0).abs() < 1e-6);
}

#[test]
fn test_matmul() {
    // 2x3 * 3x2 = 2x2
    let a = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(3, 2, vec![7.0_f32, 8.0, 9.0, 10.0, 11.0, 12.0])
        .expect("test data has correct dimensions: 3*2=6 elements");
    let c = a
        .matmul(&b)
        .expect("matrix dimensions are compatible for multiplication: 2x3 * 3x2");

    assert_eq!(c.shape(), (2, 2));
    // c[0,0] = 1*7 + 2*9 + 3*11 = 58
    assert!((c.get(0, 0) - 58.0).abs() < 1e-6);
    // c[0,1] = 1*8 + 2*10 + 3*12 = 64
    assert!((c.get(0, 1) - 64.0).abs() < 1e-6);
}

#[test]
fn test_matmul_dimension_error() {
    let a = Matrix::from_vec(2, 3, vec![1.0_f32; 6])
        .expect("test data has correct dimensions: 2*3=6 elements");
    let b = Matrix::from_vec(2, 2, vec![1.0_f32; 4])
        .expect("test data has correct dimensions: 2*2=4 elements");
    assert!(a.matmul(&b).is_err());
}
