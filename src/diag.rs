use std::fmt;

use crate::error::OpKind;

/// Spatial axis an advisory refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// Input padding side an advisory refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingSide {
    Top,
    Left,
    Bottom,
    Right,
}

impl fmt::Display for PaddingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingSide::Top => write!(f, "top"),
            PaddingSide::Left => write!(f, "left"),
            PaddingSide::Bottom => write!(f, "bottom"),
            PaddingSide::Right => write!(f, "right"),
        }
    }
}

/// Legal but wasteful configuration, reported during descriptor
/// construction. Construction still succeeds; these only flag work the
/// operator will do for nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inefficiency {
    /// Stride exceeds the kernel size along `axis`, so some input
    /// elements are never read. Subsampling should be performed before
    /// the operation instead.
    StrideExceedsKernel {
        op: OpKind,
        axis: Axis,
        kernel: u32,
        stride: u32,
    },
    /// Padding on `side` is at least as large as the kernel dimension on
    /// that axis, so some output elements are computed entirely from
    /// padding.
    PaddingExceedsKernel {
        op: OpKind,
        side: PaddingSide,
        kernel: u32,
        padding: u32,
    },
}

impl fmt::Display for Inefficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inefficiency::StrideExceedsKernel {
                op,
                axis,
                kernel,
                stride,
            } => write!(
                f,
                "inefficiency in {op}: {axis} subsampling ({stride}) is greater than kernel \
                 {axis} ({kernel}); subsampling should be performed before the {op}"
            ),
            Inefficiency::PaddingExceedsKernel {
                op,
                side,
                kernel,
                padding,
            } => write!(
                f,
                "inefficiency in {op}: input {side} padding ({padding}) is greater or equal \
                 to the kernel dimension ({kernel}) on that axis"
            ),
        }
    }
}

/// Receives advisory diagnostics emitted while building a descriptor.
///
/// Passing the sink in keeps the core free of global logging state and
/// lets embedders (and tests) capture or filter advisories.
pub trait DiagnosticSink {
    fn report(&mut self, diag: Inefficiency);
}

/// Forwards advisories to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diag: Inefficiency) {
        log::info!("{diag}");
    }
}

/// Collects advisories; convenient for inspection after construction.
impl DiagnosticSink for Vec<Inefficiency> {
    fn report(&mut self, diag: Inefficiency) {
        self.push(diag);
    }
}
