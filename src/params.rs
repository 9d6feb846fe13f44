use crate::diag::{Axis, DiagnosticSink, Inefficiency, LogSink, PaddingSide};
use crate::dims::compute_output_dimension;
use crate::error::{ConvParamError, OpKind, Result};
use crate::kernel::KernelType;

/// Per-side input padding, in elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl Padding {
    /// The same padding on all four sides.
    pub fn uniform(pad: u32) -> Self {
        Padding {
            top: pad,
            left: pad,
            bottom: pad,
            right: pad,
        }
    }

    /// Summed padding across the width axis (left + right).
    pub fn total_width(&self) -> u32 {
        self.left + self.right
    }

    /// Summed padding across the height axis (top + bottom).
    pub fn total_height(&self) -> u32 {
        self.top + self.bottom
    }

    /// True if any side is nonzero.
    pub fn any(&self) -> bool {
        (self.top | self.left | self.bottom | self.right) != 0
    }
}

/// User-specified configuration for one quantized convolution or
/// deconvolution operator. All dimension pairs are (width, height).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvConfig {
    pub kernel: (u32, u32),
    pub stride: (u32, u32),
    pub dilation: (u32, u32),
    pub padding: Padding,
    /// Output-side size adjustment; only meaningful when `transpose` is set.
    pub adjustment: (u32, u32),
    /// Number of independent channel groups the operator is split into.
    pub groups: u32,
    pub input_channels: usize,
    pub output_channels: usize,
    /// Quantization zero-point of the kernel weights.
    pub kernel_zero_point: u8,
    /// Quantization scale of the kernel weights; must be positive and normal.
    pub kernel_scale: f32,
    /// Lower output clamp bound. `output_min <= output_max` is expected
    /// but not enforced.
    pub output_min: u8,
    /// Upper output clamp bound.
    pub output_max: u8,
    /// `false` = convolution, `true` = deconvolution.
    pub transpose: bool,
}

impl Default for ConvConfig {
    /// 1x1 forward convolution, unit stride and dilation, no padding,
    /// one group and one channel each side, identity quantization, full
    /// u8 output range.
    fn default() -> Self {
        ConvConfig {
            kernel: (1, 1),
            stride: (1, 1),
            dilation: (1, 1),
            padding: Padding::default(),
            adjustment: (0, 0),
            groups: 1,
            input_channels: 1,
            output_channels: 1,
            kernel_zero_point: 0,
            kernel_scale: 1.0,
            output_min: 0,
            output_max: 255,
            transpose: false,
        }
    }
}

/// Per-group input channel count at which the classifier would pick the
/// zero-point-precomputed GEMM over the plain one. Channel counts cannot
/// reach this value, so the `XzpGemm` branch is currently never taken.
pub const XZP_GEMM_CHANNEL_THRESHOLD: usize = usize::MAX;

/// Validated, classified parameters for one convolution operator.
///
/// Built once per operator. Immutable afterwards, so it can be shared
/// across any number of concurrent inference calls without locking;
/// [`ConvParams::compute_output_dims`] and every accessor are pure reads.
#[derive(Debug, Clone)]
pub struct ConvParams {
    config: ConvConfig,
    group_input_channels: usize,
    group_output_channels: usize,
    kernel_type: KernelType,
}

impl ConvParams {
    /// Validates `config`, classifies the micro-kernel, and builds the
    /// descriptor.
    ///
    /// Advisory inefficiency warnings go to the `log` facade at info
    /// level; a fatal configuration error is logged at error level and
    /// returned.
    pub fn new(config: ConvConfig) -> Result<ConvParams> {
        ConvParams::new_with_sink(config, &mut LogSink).map_err(|err| {
            log::error!("{err}");
            err
        })
    }

    /// Like [`ConvParams::new`], but delivers advisories to `sink` and
    /// leaves fatal failures entirely to the returned error.
    pub fn new_with_sink(config: ConvConfig, sink: &mut dyn DiagnosticSink) -> Result<ConvParams> {
        let op = OpKind::from_transpose(config.transpose);
        let (kernel_width, kernel_height) = config.kernel;
        let (stride_width, stride_height) = config.stride;
        let (dilation_width, dilation_height) = config.dilation;

        if config.groups == 0 {
            return Err(ConvParamError::ZeroGroups { op });
        }
        let groups = config.groups as usize;
        if config.input_channels % groups != 0 || config.output_channels % groups != 0 {
            return Err(ConvParamError::ChannelsNotDivisible {
                op,
                input_channels: config.input_channels,
                output_channels: config.output_channels,
                groups: config.groups,
            });
        }
        let group_input_channels = config.input_channels / groups;
        let group_output_channels = config.output_channels / groups;

        if kernel_width == 0 || kernel_height == 0 {
            return Err(ConvParamError::ZeroKernelDimension {
                op,
                width: kernel_width,
                height: kernel_height,
            });
        }
        if stride_width == 0 || stride_height == 0 {
            return Err(ConvParamError::ZeroStrideDimension {
                op,
                width: stride_width,
                height: stride_height,
            });
        }
        if dilation_width == 0 || dilation_height == 0 {
            return Err(ConvParamError::ZeroDilationDimension {
                op,
                width: dilation_width,
                height: dilation_height,
            });
        }
        if config.kernel_scale <= 0.0 || !config.kernel_scale.is_normal() {
            return Err(ConvParamError::InvalidKernelScale {
                op,
                scale: config.kernel_scale,
            });
        }

        if stride_height > kernel_height {
            sink.report(Inefficiency::StrideExceedsKernel {
                op,
                axis: Axis::Height,
                kernel: kernel_height,
                stride: stride_height,
            });
        }
        if stride_width > kernel_width {
            sink.report(Inefficiency::StrideExceedsKernel {
                op,
                axis: Axis::Width,
                kernel: kernel_width,
                stride: stride_width,
            });
        }
        if config.padding.top >= kernel_height {
            sink.report(Inefficiency::PaddingExceedsKernel {
                op,
                side: PaddingSide::Top,
                kernel: kernel_height,
                padding: config.padding.top,
            });
        }
        if config.padding.bottom >= kernel_height {
            sink.report(Inefficiency::PaddingExceedsKernel {
                op,
                side: PaddingSide::Bottom,
                kernel: kernel_height,
                padding: config.padding.bottom,
            });
        }
        if config.padding.right >= kernel_width {
            sink.report(Inefficiency::PaddingExceedsKernel {
                op,
                side: PaddingSide::Right,
                kernel: kernel_width,
                padding: config.padding.right,
            });
        }
        if config.padding.left >= kernel_width {
            sink.report(Inefficiency::PaddingExceedsKernel {
                op,
                side: PaddingSide::Left,
                kernel: kernel_width,
                padding: config.padding.left,
            });
        }

        let kernel_area = kernel_width * kernel_height;
        let kernel_type = if config.transpose {
            // Every transposed convolution runs on the general kernel;
            // the depthwise path has no transposed counterpart.
            KernelType::Conv
        } else if (kernel_area == 9 || kernel_area == 25)
            && group_input_channels == 1
            && group_output_channels == 1
            && config.groups > 1
        {
            KernelType::DwConv
        } else if kernel_area == 1 && config.stride == (1, 1) && !config.padding.any() {
            if group_input_channels >= XZP_GEMM_CHANNEL_THRESHOLD {
                KernelType::XzpGemm
            } else {
                KernelType::Gemm
            }
        } else {
            KernelType::Conv
        };

        Ok(ConvParams {
            config,
            group_input_channels,
            group_output_channels,
            kernel_type,
        })
    }

    /// The configuration the descriptor was built from.
    pub fn config(&self) -> &ConvConfig {
        &self.config
    }

    /// Convolution or deconvolution.
    pub fn op_kind(&self) -> OpKind {
        OpKind::from_transpose(self.config.transpose)
    }

    /// Input channels per group.
    pub fn group_input_channels(&self) -> usize {
        self.group_input_channels
    }

    /// Output channels per group.
    pub fn group_output_channels(&self) -> usize {
        self.group_output_channels
    }

    /// The micro-kernel variant selected for this operator.
    pub fn kernel_type(&self) -> KernelType {
        self.kernel_type
    }

    /// Output (width, height) for an input of the given spatial size.
    ///
    /// Pure; safe to call repeatedly and concurrently. Input sizes
    /// inconsistent with the configured padding and kernel are not
    /// checked here (see [`crate::dims::compute_output_dimension`]).
    pub fn compute_output_dims(&self, input_dims: (usize, usize)) -> (usize, usize) {
        let c = &self.config;
        let output_width = compute_output_dimension(
            input_dims.0,
            c.padding.total_width() as usize,
            c.adjustment.0 as usize,
            c.kernel.0 as usize,
            c.dilation.0 as usize,
            c.stride.0 as usize,
            c.transpose,
        );
        let output_height = compute_output_dimension(
            input_dims.1,
            c.padding.total_height() as usize,
            c.adjustment.1 as usize,
            c.kernel.1 as usize,
            c.dilation.1 as usize,
            c.stride.1 as usize,
            c.transpose,
        );
        (output_width, output_height)
    }
}
