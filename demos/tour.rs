use anyhow::Context;
use log::LevelFilter;
use matview::*;
use num_complex::Complex;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("matview"), LevelFilter::Trace)
        .init();

    let m1 = identity::<f32, 2>();
    let m2 = identity::<f32, 2>();
    println!("M1:            {}", m1);
    println!("M2:            {}", m2);
    println!("M1 + M2:       {}", m1 + m2);
    println!("M1 - M2:       {}", m1 - m2);
    println!("M1 * M2:       {}", m1 * m2);
    println!("M1^T * 3 + M2: {}", (m1.transposed() * 3.0) + m2);

    let m3 = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    println!("M3:            {}", m3);
    println!("M3^T:          {}", m3.transposed());
    println!("M3.row(0):     {}", m3.row_vector(0));
    println!("M3.col(0):     {}", m3.column_vector(0));
    for row in 0..2 {
        for col in 0..2 {
            println!("M3[{}][{}]:      {}", row, col, m3[(row, col)]);
        }
    }

    println!("det(I7):       {}", determinant(&identity::<f32, 7>()));

    let v1 = RowVector::from_rows([[1.0f32, 2.0]]);
    let v2 = RowVector::from_rows([[3.0f32, 4.0]]);
    println!("V1:            {}", v1);
    println!("V2:            {}", v2);
    println!("V1 + V2:       {}", v1 + v2);
    println!("V1 - V2:       {}", v1 - v2);
    println!("V1 * V2^T:     {}", v1 * v2.transposed());
    println!("V1^T * V2:     {}", v1.transposed() * v2);
    println!("|V1|:          {}", length(&v1));

    let m5 = identity::<Complex<f64>, 2>() * Complex::new(2.0, 1.0);
    println!("M5:            {}", m5);
    println!("M5^H:          {}", hermitian(&m5));

    let m6 = Matrix::from_rows([[5.0, 2.0], [7.0, 9.0]]);
    let inv = inverse(&m6).context("M6 should be invertible")?;
    println!("M6:            {}", m6);
    println!("det(M6):       {}", determinant(&m6));
    println!("M6^-1:         {:.4}", inv);
    println!("M6 * M6^-1:    {}", m6 * inv);

    let m7 = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    println!("M7:            {}", m7);
    println!("adj(M7):       {}", adjugate(&m7));
    println!("V3:            {}", m7.column_vector(1));

    // Singular matrices have no inverse; this also logs a trace message.
    let singular = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
    match inverse(&singular) {
        Some(inv) => println!("S^-1:          {}", inv),
        None => println!("S^-1:          None"),
    }

    let mut m8 = Matrix::<i32, 4, 4>::from_fn(|row, col| (row * 4 + col) as i32);
    println!("M8:            {}", m8);
    println!("minor(1, 2):   {}", m8.minor::<3, 3>(1, 2));
    println!("det(minor):    {}", determinant(&m8.minor::<3, 3>(1, 2)));

    // Writes through a composed view land in the underlying matrix.
    m8.transposed_mut()
        .submatrix::<2, 2>(2, 0)
        .assign(&Matrix::from_rows([[-1, -2], [-3, -4]]));
    println!("M8':           {:#?}", m8);

    let quarter = std::f64::consts::FRAC_PI_2;
    let point = ColumnVector::from_rows([[1.0], [0.0], [1.0]]);
    println!("rot(pi/2) * P: {:.3}", rotation_affine(quarter) * point);
    let scaled = scaling_at::<f64, 2, 3>([2.0, 2.0], &ColumnVector::from_rows([[1.0], [1.0]]));
    println!("scale_at * P:  {:.3}", scaled * point);

    // A quarter turn around the unit circle, integrated with RK4.
    let spin = Matrix::from_rows([[0.0, -1.0], [1.0, 0.0]]);
    let mut state = ColumnVector::from_rows([[1.0], [0.0]]);
    for _ in 0..100 {
        state = rk4(state, quarter / 100.0, |x| spin * x);
    }
    println!("rk4 orbit:     {:.3}", state.transposed());

    Ok(())
}
