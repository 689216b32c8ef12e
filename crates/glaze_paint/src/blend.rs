//! Blend modes for compositing source pixels over the destination.

/// Per-pixel compositing operator.
///
/// The first group are the Porter-Duff operators; the separable and
/// non-separable groups follow the CSS compositing spec
/// (<https://www.w3.org/TR/compositing-1/>).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Clear,
    Src,
    Dst,
    #[default]
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcATop,
    DstATop,
    Xor,
    Plus,

    // Separable blend modes
    Modulate,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Multiply,

    // Non-separable blend modes
    Hue,
    Saturation,
    Color,
    Luminosity,
}
