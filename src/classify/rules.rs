//! The ordered detector list. First match wins.

use super::features::{
    is_bare_year, strip_attribution, unquote, SlideFeatures, CASE_STUDY, CLOSING, NUMBER_ONLY, QUOTED,
    STAT_LINE, VERSUS,
};
use super::ClassifierOptions;
use crate::model::{ContentType, StatZone, Zones, MAX_DASHBOARD_STATS};

/// Outcome of a matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Detection {
    pub content_type: ContentType,
    pub zones: Option<Zones>,
    pub note: Option<String>,
}

impl Detection {
    fn of(content_type: ContentType) -> Option<Self> {
        Some(Self {
            content_type,
            zones: None,
            note: None,
        })
    }
}

type Detector = fn(&SlideFeatures, &ClassifierOptions) -> Option<Detection>;

/// A named pure predicate over slide features.
pub(super) struct Rule {
    pub name: &'static str,
    pub detect: Detector,
}

/// Detectors in evaluation order.
pub(super) const RULES: &[Rule] = &[
    Rule { name: "stats_dashboard", detect: stats_dashboard },
    Rule { name: "statistic", detect: statistic },
    Rule { name: "case_study_full", detect: case_study_full },
    Rule { name: "quote", detect: quote },
    Rule { name: "numbered_step", detect: numbered_step },
    Rule { name: "comparison", detect: comparison },
    Rule { name: "title_opening", detect: title_opening },
    Rule { name: "closing", detect: closing },
    Rule { name: "image_dominant", detect: image_dominant },
    Rule { name: "section_header", detect: section_header },
    Rule { name: "statement", detect: statement },
    Rule { name: "text_length", detect: text_length },
];

fn stats_dashboard(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    if f.body.is_empty() || f.body_chars > o.max_dashboard_chars {
        return None;
    }
    let (mut stats, leftover) = extract_stats(f);
    if stats.len() < o.min_dashboard_stats || leftover > 1 {
        return None;
    }

    let mut note = None;
    if stats.len() > MAX_DASHBOARD_STATS {
        note = Some(format!(
            "{} stats found; dashboard keeps the first {}",
            stats.len(),
            MAX_DASHBOARD_STATS
        ));
        stats.truncate(MAX_DASHBOARD_STATS);
    }

    Some(Detection {
        content_type: ContentType::StatsDashboard,
        zones: Some(Zones::stats(stats)),
        note,
    })
}

fn statistic(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    if f.total_words() == 0 || f.total_words() > o.max_statistic_words || f.number_count() != 1 {
        return None;
    }
    let leads_with_figure = |text: &str| figure_line(text) || stat_line(text).is_some();
    if leads_with_figure(&f.title) || f.lines.iter().any(|l| leads_with_figure(&l.text)) {
        Detection::of(ContentType::Statistic)
    } else {
        None
    }
}

fn case_study_full(f: &SlideFeatures, _: &ClassifierOptions) -> Option<Detection> {
    if !CASE_STUDY.is_match(&f.title) {
        return None;
    }
    f.quoted_line()?;
    f.attribution_line()?;
    Some(Detection {
        content_type: ContentType::CaseStudyFull,
        zones: Some(extract_case_study(f)),
        note: None,
    })
}

fn quote(f: &SlideFeatures, _: &ClassifierOptions) -> Option<Detection> {
    let quoted = f.quoted_line().is_some() || QUOTED.is_match(&f.title);
    let attributed = f.attribution_line().is_some() && f.lines.len() <= 4;
    if quoted || attributed {
        Detection::of(ContentType::Quote)
    } else {
        None
    }
}

fn numbered_step(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    let steps = f.lines.iter().filter(|l| l.numbered).count();
    if steps >= o.min_numbered_steps {
        Detection::of(ContentType::NumberedStep)
    } else {
        None
    }
}

fn comparison(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    if f.blocks.len() == 2 {
        let a = f.blocks[0].chars().count();
        let b = f.blocks[1].chars().count();
        let (short, long) = (a.min(b), a.max(b));
        if short >= o.min_comparison_block_chars
            && short as f32 / long as f32 >= o.min_comparison_balance
        {
            return Detection::of(ContentType::Comparison);
        }
    }
    if f.blocks.len() >= 2 && VERSUS.is_match(&f.title) {
        return Detection::of(ContentType::Comparison);
    }
    None
}

fn title_opening(f: &SlideFeatures, _: &ClassifierOptions) -> Option<Detection> {
    if f.is_first() && !f.title.is_empty() {
        Detection::of(ContentType::TitleOpening)
    } else {
        None
    }
}

fn closing(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    if f.is_empty() || f.body_words > o.max_statement_words {
        return None;
    }
    if f.is_last() || CLOSING.is_match(&f.title) {
        Detection::of(ContentType::Closing)
    } else {
        None
    }
}

fn image_dominant(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    if f.image_count == 0
        || f.body_words > o.max_hero_body_words
        || f.title_words > o.max_short_title_words
    {
        return None;
    }
    if CASE_STUDY.is_match(&f.title) || CASE_STUDY.is_match(&f.body) {
        Detection::of(ContentType::CaseStudy)
    } else {
        Detection::of(ContentType::Feature)
    }
}

fn section_header(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    if f.body.is_empty()
        && f.image_count == 0
        && !f.title.is_empty()
        && f.title_words <= o.max_short_title_words
    {
        Detection::of(ContentType::SectionHeader)
    } else {
        None
    }
}

fn statement(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    let words = f.total_words();
    if f.lines.len() <= 1 && !f.has_bullets() && words > 0 && words <= o.max_statement_words {
        Detection::of(ContentType::Statement)
    } else {
        None
    }
}

fn text_length(f: &SlideFeatures, o: &ClassifierOptions) -> Option<Detection> {
    if f.body.is_empty() {
        None
    } else if f.body_chars <= o.max_bullet_chars {
        Detection::of(ContentType::BulletList)
    } else {
        Detection::of(ContentType::DetailedContent)
    }
}

/// Pull `{number, label}` pairs out of the body lines.
///
/// A pair is either one line (`87% satisfaction`) or a figure-only line
/// followed by its label line. Returns the pairs and the count of lines
/// that belong to no pair.
pub(super) fn extract_stats(f: &SlideFeatures) -> (Vec<StatZone>, usize) {
    let lines = &f.lines;
    let mut stats = Vec::new();
    let mut leftover = 0;
    let mut i = 0;

    while i < lines.len() {
        let text = &lines[i].text;
        if figure_line(text) {
            if let Some(label) = lines.get(i + 1).filter(|l| !NUMBER_ONLY.is_match(&l.text)) {
                stats.push(StatZone::new(text.clone(), label.text.clone()));
                i += 2;
                continue;
            }
        } else if let Some(caps) = stat_line(text) {
            stats.push(StatZone::new(caps["number"].trim(), caps["label"].trim()));
            i += 1;
            continue;
        }
        leftover += 1;
        i += 1;
    }

    (stats, leftover)
}

fn figure_line(text: &str) -> bool {
    NUMBER_ONLY.is_match(text) && !is_bare_year(text)
}

fn stat_line(text: &str) -> Option<regex::Captures<'_>> {
    STAT_LINE
        .captures(text)
        .filter(|caps| !is_bare_year(&caps["number"]))
}

/// Split a case study slide into its zones.
pub(super) fn extract_case_study(f: &SlideFeatures) -> Zones {
    let quote_line = f.quoted_line().map(|l| l.text.clone());
    let attribution_line = f.attribution_line().map(|l| l.text.clone());

    let mut description = Vec::new();
    let mut bullets = Vec::new();
    for line in &f.lines {
        let text = Some(&line.text);
        if text == quote_line.as_ref() || text == attribution_line.as_ref() {
            continue;
        }
        if line.bullet {
            bullets.push(line.text.as_str());
        } else {
            description.push(line.text.as_str());
        }
    }

    Zones::CaseStudyFull {
        company_name: company_name(&f.title),
        description: description.join(" "),
        bullets: bullets.join("\n"),
        quote: quote_line.as_deref().map(unquote).unwrap_or_default(),
        attribution: attribution_line
            .as_deref()
            .map(strip_attribution)
            .unwrap_or_default(),
    }
}

/// "Case Study: Acme Corp" → "Acme Corp".
fn company_name(title: &str) -> String {
    title
        .split(|c| matches!(c, ':' | '|' | '–' | '—'))
        .map(str::trim)
        .find(|part| !part.is_empty() && !CASE_STUDY.is_match(part))
        .unwrap_or(title)
        .to_string()
}
