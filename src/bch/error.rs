#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BchParamError {
    #[error("code word length must be >= 1")]
    EmptyCode,
    #[error("code word length {n} exceeds the {max}-bit code word")]
    CodeTooLong { n: usize, max: usize },
    #[error("data length must be < code length, got k={k}, n={n}")]
    DimensionTooLarge { n: usize, k: usize },
    #[error("polynomial {poly:#x} has terms above x^{m}")]
    PolyTooWide { poly: u32, m: u32 },
    #[error("polynomial {poly:#x} is not primitive over GF(2^{m})")]
    NotPrimitive { poly: u32, m: u32 },
    #[error("generator degree mismatch (expected {expected}, got {got})")]
    GeneratorDegree { expected: usize, got: usize },
}
