//! Classifier thresholds.

use crate::model::MAX_DASHBOARD_STATS;

/// Tunable thresholds for the classifier's pattern rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierOptions {
    /// Longest body (characters) still read as a stats dashboard
    pub max_dashboard_chars: usize,

    /// Fewest `{number, label}` pairs that make a dashboard
    pub min_dashboard_stats: usize,

    /// Most words on a single-statistic slide
    pub max_statistic_words: usize,

    /// Longest body (characters) still read as a bullet list
    pub max_bullet_chars: usize,

    /// Shortest block (characters) counted as a comparison side
    pub min_comparison_block_chars: usize,

    /// Smallest shorter/longer block length ratio for a comparison
    pub min_comparison_balance: f32,

    /// Most body words on an image-dominant slide
    pub max_hero_body_words: usize,

    /// Most words in a "short" title
    pub max_short_title_words: usize,

    /// Fewest enumerated lines for a numbered step slide
    pub min_numbered_steps: usize,

    /// Most words in a statement slide
    pub max_statement_words: usize,

    /// Whether to classify slides in parallel
    pub parallel: bool,
}

impl ClassifierOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dashboard body length limit.
    pub fn with_max_dashboard_chars(mut self, chars: usize) -> Self {
        self.max_dashboard_chars = chars;
        self
    }

    /// Set the minimum dashboard stat count (capped at the dashboard size).
    pub fn with_min_dashboard_stats(mut self, count: usize) -> Self {
        self.min_dashboard_stats = count.clamp(1, MAX_DASHBOARD_STATS);
        self
    }

    pub fn with_max_statistic_words(mut self, words: usize) -> Self {
        self.max_statistic_words = words;
        self
    }

    /// Set the bullet list / detailed content boundary.
    pub fn with_max_bullet_chars(mut self, chars: usize) -> Self {
        self.max_bullet_chars = chars;
        self
    }

    pub fn with_comparison_balance(mut self, min_block_chars: usize, balance: f32) -> Self {
        self.min_comparison_block_chars = min_block_chars;
        self.min_comparison_balance = balance.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_hero_body_words(mut self, words: usize) -> Self {
        self.max_hero_body_words = words;
        self
    }

    pub fn with_max_short_title_words(mut self, words: usize) -> Self {
        self.max_short_title_words = words;
        self
    }

    pub fn with_min_numbered_steps(mut self, steps: usize) -> Self {
        self.min_numbered_steps = steps;
        self
    }

    pub fn with_max_statement_words(mut self, words: usize) -> Self {
        self.max_statement_words = words;
        self
    }

    /// Enable or disable parallel classification.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Classify slides one at a time.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            max_dashboard_chars: 400,
            min_dashboard_stats: 2,
            max_statistic_words: 12,
            max_bullet_chars: 600,
            min_comparison_block_chars: 20,
            min_comparison_balance: 0.5,
            max_hero_body_words: 20,
            max_short_title_words: 8,
            min_numbered_steps: 3,
            max_statement_words: 25,
            parallel: true,
        }
    }
}
