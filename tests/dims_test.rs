use qconv::dims::compute_output_dimension;

#[test]
fn forward_basic() {
    // (10 + 2 - 3) / 1 + 1
    assert_eq!(compute_output_dimension(10, 2, 0, 3, 1, 1, false), 10);
}

#[test]
fn transpose_basic() {
    // 2 * (5 - 1) + 0 + 3 - 0
    assert_eq!(compute_output_dimension(5, 0, 0, 3, 1, 2, true), 11);
}

#[test]
fn forward_strided_division_truncates() {
    // (7 - 3) / 2 + 1 = 3; a 7-wide input with stride 2 leaves no room
    // for a fourth window.
    assert_eq!(compute_output_dimension(7, 0, 0, 3, 1, 2, false), 3);
    assert_eq!(compute_output_dimension(8, 0, 0, 3, 1, 2, false), 3);
    assert_eq!(compute_output_dimension(9, 0, 0, 3, 1, 2, false), 4);
}

#[test]
fn forward_dilation_widens_kernel() {
    // Effective kernel of a dilated 3-tap is (3 - 1) * 2 + 1 = 5.
    assert_eq!(compute_output_dimension(10, 0, 0, 3, 2, 1, false), 6);
    // Dilation 1 leaves the kernel untouched.
    assert_eq!(compute_output_dimension(10, 0, 0, 3, 1, 1, false), 8);
}

#[test]
fn transpose_adjustment_adds_to_output() {
    assert_eq!(compute_output_dimension(5, 0, 1, 3, 1, 2, true), 12);
}

#[test]
fn transpose_padding_shrinks_output() {
    // 2 * (5 - 1) + 0 + 3 - 2
    assert_eq!(compute_output_dimension(5, 2, 0, 3, 1, 2, true), 9);
}

#[test]
fn transpose_dilation_widens_kernel() {
    // 2 * (5 - 1) + 0 + ((3 - 1) * 3 + 1)
    assert_eq!(compute_output_dimension(5, 0, 0, 3, 3, 2, true), 15);
}

#[test]
fn same_padding_preserves_input_size() {
    // With stride 1 and total padding kernel - 1, output == input for
    // every input size.
    for kernel in [1usize, 3, 5, 7] {
        for input in 1usize..=64 {
            let out = compute_output_dimension(input, kernel - 1, 0, kernel, 1, 1, false);
            assert_eq!(
                out, input,
                "same-padding mismatch: input={}, kernel={}",
                input, kernel
            );
        }
    }
}

#[test]
fn minimal_input() {
    assert_eq!(compute_output_dimension(1, 0, 0, 1, 1, 1, false), 1);
    assert_eq!(compute_output_dimension(1, 0, 0, 1, 1, 1, true), 1);
}
