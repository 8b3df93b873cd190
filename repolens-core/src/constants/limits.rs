//! Output caps and length thresholds

pub const MAX_TECH_ITEMS: usize = 24;
pub const MAX_COMPONENTS: usize = 7;
pub const MAX_PATTERNS: usize = 4;

pub const MAX_FEATURES: usize = 8;
/// Bullets considered for features
pub const FEATURE_BULLET_SCAN: usize = 8;
/// Below this many features, topics are added
pub const MIN_FEATURES: usize = 4;
pub const FEATURE_TOPIC_SCAN: usize = 6;
pub const FEATURE_NAME_CHARS: usize = 48;
/// Cleaned bullets must be longer than this to become a feature
pub const FEATURE_MIN_CHARS: usize = 4;

pub const MAX_USE_CASES: usize = 6;
pub const USE_CASE_BULLET_SCAN: usize = 6;

pub const MAX_PERSONAS: usize = 6;
pub const MAX_DOMAINS: usize = 6;

pub const MAX_COMMAND_BLOCKS: usize = 4;
/// README characters searched when no setup section exists
pub const SETUP_SCAN_CHARS: usize = 3500;

pub const MAX_DESIGN_DECISIONS: usize = 6;
/// Cleaned bullets must be longer than this to count as a decision
pub const DECISION_MIN_CHARS: usize = 6;

/// Captured section lines beyond which capture stops
pub const MAX_SECTION_LINES: usize = 80;
