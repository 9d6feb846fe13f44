/// Output size along one spatial axis of a convolution or deconvolution.
///
/// `total_padding` is the sum of the padding on both sides of the axis;
/// `adjustment_dim` only contributes on the transposed path. The kernel
/// extent is first widened by the dilation, then:
///
/// - transposed: `stride * (input - 1) + adjustment + eff_kernel - total_padding`
/// - forward: `(input + total_padding - eff_kernel) / stride + 1`,
///   with truncating integer division.
///
/// Inputs are assumed valid (non-zero kernel, stride, and dilation):
/// validation happens once when the descriptor is built, not per call.
/// An input size inconsistent with the configured padding and kernel
/// (for example `input_dim + total_padding < eff_kernel`) is not checked
/// here; callers guard against it.
pub fn compute_output_dimension(
    input_dim: usize,
    total_padding: usize,
    adjustment_dim: usize,
    kernel_dim: usize,
    dilation_dim: usize,
    stride_dim: usize,
    transpose: bool,
) -> usize {
    let eff_kernel = (kernel_dim - 1) * dilation_dim + 1;
    if transpose {
        stride_dim * (input_dim - 1) + adjustment_dim + eff_kernel - total_padding
    } else {
        (input_dim + total_padding - eff_kernel) / stride_dim + 1
    }
}
