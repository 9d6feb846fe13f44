use std::fmt;

/// Micro-kernel variant selected for a convolution operator.
///
/// The set is closed: the numeric dispatch layer matches on it
/// exhaustively, so each variant maps to exactly one execution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KernelType {
    /// No kernel. Part of the dispatch table, but classification never
    /// produces it.
    None,
    /// Dense matrix multiply (1x1 kernel, unit stride, no padding).
    Gemm,
    /// GEMM formulation with precomputed zero-point row sums, for extreme
    /// per-group channel counts.
    XzpGemm,
    /// General sliding-window kernel; also every transposed convolution.
    Conv,
    /// Depthwise kernel (one input and one output channel per group).
    DwConv,
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelType::None => write!(f, "none"),
            KernelType::Gemm => write!(f, "gemm"),
            KernelType::XzpGemm => write!(f, "xzp-gemm"),
            KernelType::Conv => write!(f, "conv"),
            KernelType::DwConv => write!(f, "dwconv"),
        }
    }
}
