/// Thematic break: a block consisting of exactly one marker.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKERS: [&'static str; 3] = ["***", "---", "___"];

    pub fn matches(block: &str) -> bool {
        Self::MARKERS.contains(&block)
    }
}
