use std::fmt;

use thiserror::Error;

/// Result type alias for descriptor construction.
pub type Result<T> = std::result::Result<T, ConvParamError>;

/// Whether a configuration describes a convolution or a deconvolution.
///
/// Used in error and diagnostic messages so they name the operation the
/// caller actually asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpKind {
    Convolution,
    Deconvolution,
}

impl OpKind {
    pub(crate) fn from_transpose(transpose: bool) -> Self {
        if transpose {
            OpKind::Deconvolution
        } else {
            OpKind::Convolution
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpKind::Convolution => write!(f, "convolution"),
            OpKind::Deconvolution => write!(f, "deconvolution"),
        }
    }
}

/// Fatal configuration error raised while building a descriptor.
///
/// One variant per violated constraint. No descriptor is produced on any
/// of these; there is no degraded-continue path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvParamError {
    /// `groups` was zero.
    #[error("failed to create {op} with groups equal to zero")]
    ZeroGroups { op: OpKind },

    /// Input or output channels not evenly divisible by `groups`.
    #[error(
        "failed to create {op}: input channels ({input_channels}) and output channels \
         ({output_channels}) must be divisible by groups ({groups})"
    )]
    ChannelsNotDivisible {
        op: OpKind,
        input_channels: usize,
        output_channels: usize,
        groups: u32,
    },

    /// Kernel width or height was zero.
    #[error("failed to create {op} with {width}x{height} kernel: kernel dimensions must be non-zero")]
    ZeroKernelDimension { op: OpKind, width: u32, height: u32 },

    /// Stride width or height was zero.
    #[error(
        "failed to create {op} with {width}x{height} subsampling: subsampling dimensions must be non-zero"
    )]
    ZeroStrideDimension { op: OpKind, width: u32, height: u32 },

    /// Dilation width or height was zero.
    #[error("failed to create {op} with {width}x{height} dilation: dilation dimensions must be non-zero")]
    ZeroDilationDimension { op: OpKind, width: u32, height: u32 },

    /// Kernel scale was zero, negative, subnormal, infinite, or NaN.
    #[error("failed to create {op} with {scale} kernel scale: scale must be finite and positive")]
    InvalidKernelScale { op: OpKind, scale: f32 },
}
