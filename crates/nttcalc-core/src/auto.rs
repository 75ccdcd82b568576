//! Threshold-driven dispatch between the simple and hybrid paths.

use crate::calculator::{CoreCalculator, MulError};
use crate::hybrid::HybridNtt;
use crate::operand::Operand;
use crate::options::Options;
use crate::simple::SimpleNtt;
use crate::strategy::{select_path, Path};

/// Picks the simple path below `opts.hybrid_threshold` digits and the hybrid
/// path at or above it. Lengths include any leading zeros.
pub struct AutoNtt {
    simple: SimpleNtt,
    hybrid: HybridNtt,
}

impl AutoNtt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            simple: SimpleNtt::new(),
            hybrid: HybridNtt::new(),
        }
    }

    /// Path that `multiply_core` would take for these operands.
    #[must_use]
    pub fn path_for(a: &Operand<'_>, b: &Operand<'_>, opts: &Options) -> Path {
        select_path(a.len(), b.len(), opts.hybrid_threshold)
    }
}

impl Default for AutoNtt {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for AutoNtt {
    fn multiply_core(
        &self,
        a: &Operand<'_>,
        b: &Operand<'_>,
        opts: &Options,
    ) -> Result<String, MulError> {
        let path = Self::path_for(a, b, opts);
        tracing::debug!(%path, len1 = a.len(), len2 = b.len(), "selected path");
        match path {
            Path::Simple => self.simple.multiply_core(a, b, opts),
            Path::Hybrid => self.hybrid.multiply_core(a, b, opts),
        }
    }

    fn name(&self) -> &'static str {
        "AutoNtt"
    }
}
