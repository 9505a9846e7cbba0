/// Bold text, `**strong**` or `__strong__`.
pub struct Strong;

impl Strong {
    /// Tried in this order.
    pub const MARKERS: [&'static str; 2] = ["**", "__"];
    pub const TAG: &'static str = "strong";
}

/// Italic text, `*em*` or `_em_`.
pub struct Emphasis;

impl Emphasis {
    /// Tried in this order, after every [`Strong`] marker.
    pub const MARKERS: [&'static str; 2] = ["*", "_"];
    pub const TAG: &'static str = "em";
}
