//! Parameter validation and micro-kernel selection for quantized 2-D
//! convolution and deconvolution operators.
//!
//! This crate is the decision layer between a user-specified operator
//! configuration (kernel size, stride, dilation, padding, groups,
//! quantization scale and zero-point) and numeric kernel dispatch. A
//! configuration is validated once when the operator is created; the
//! resulting descriptor carries the derived per-group channel counts and
//! the selected micro-kernel variant, and computes output spatial sizes
//! for each inference call. It performs no tensor arithmetic and owns no
//! packed weights.
//!
//! # Example
//!
//! ```
//! use qconv::params::{ConvConfig, ConvParams, Padding};
//! use qconv::kernel::KernelType;
//!
//! // 3x3 depthwise convolution over 32 channels, "same" padding.
//! let params = ConvParams::new(ConvConfig {
//!     kernel: (3, 3),
//!     padding: Padding::uniform(1),
//!     groups: 32,
//!     input_channels: 32,
//!     output_channels: 32,
//!     ..ConvConfig::default()
//! })?;
//!
//! assert_eq!(params.kernel_type(), KernelType::DwConv);
//! assert_eq!(params.compute_output_dims((28, 28)), (28, 28));
//! # Ok::<(), qconv::error::ConvParamError>(())
//! ```

/// Per-axis output-dimension arithmetic.
pub mod dims;
/// Structured construction errors.
pub mod error;
/// Advisory diagnostics for legal but wasteful configurations.
pub mod diag;
/// Micro-kernel variant tags shared with the dispatch layer.
pub mod kernel;
/// Convolution configuration and the validated parameter descriptor.
pub mod params;
