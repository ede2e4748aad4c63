#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{multiply, naive_multiply, Matrix};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First 3 bytes pick the shapes, capped at 24 for speed
    let m = usize::from(data[0] % 24);
    let k = usize::from(data[1] % 24);
    let n = usize::from(data[2] % 24);
    let cells = &data[3..];

    let cell = |idx: usize| i64::from(cells.get(idx % cells.len().max(1)).copied().unwrap_or(0)) - 128;

    // Zero sides must be rejected at construction, never panic
    let (Ok(a), Ok(b)) = (
        Matrix::from_fn(m, k, |i, j| cell(i * k + j)),
        Matrix::from_fn(k, n, |i, j| cell(m * k + i * n + j)),
    ) else {
        return;
    };

    let product = multiply(&a, &b).expect("compatible operands must multiply");
    assert_eq!(product, naive_multiply(&a, &b).expect("naive product"));

    // Incompatible inner dimensions must be an error, never a panic
    let _ = multiply(&a, &a);
});
