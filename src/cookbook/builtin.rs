//! The 13 built-in layout recipes, in registry order.

use super::recipe::{
    BackgroundSpec, BoxPosition, ImageBoxSpec, LayoutRecipe, TextBoxSpec, VerticalAnchor,
};
use crate::model::ContentType::{self, *};

fn inches(x: f64, y: f64, w: f64, h: f64) -> BoxPosition {
    BoxPosition::from_inches(x, y, w, h)
}

fn recipe(
    name: &'static str,
    description: &'static str,
    content_types: &'static [ContentType],
) -> LayoutRecipe {
    LayoutRecipe::new(name, description, content_types)
}

pub(super) fn build() -> Vec<LayoutRecipe> {
    let mut recipes = Vec::with_capacity(13);

    let mut r = recipe(
        "title_opening",
        "Opening/title slide with large centered title",
        &[TitleOpening],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(1.0, 2.0, 8.0, 2.0))
            .size(36)
            .bold()
            .centered()
            .anchor(VerticalAnchor::Middle),
    );
    r.body = Some(
        TextBoxSpec::new("subtitle", inches(2.0, 4.2, 6.0, 1.0))
            .size(18)
            .centered()
            .color("666666"),
    );
    recipes.push(r);

    // Generic fallback: also serves `auto`.
    let mut r = recipe(
        "feature_default",
        "Standard feature slide with title and bullet body",
        &[Feature, BulletList, NumberedStep, DetailedContent, Auto],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(0.7, 0.5, 8.6, 1.0))
            .size(28)
            .bold(),
    );
    r.body = Some(TextBoxSpec::new("body", inches(0.7, 1.7, 8.6, 5.0)));
    recipes.push(r);

    let mut r = recipe(
        "content_image_left",
        "Image on left, text content on right",
        &[CaseStudy, Feature],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(5.2, 0.5, 4.5, 1.0))
            .size(24)
            .bold(),
    );
    r.body = Some(TextBoxSpec::new("body", inches(5.2, 1.7, 4.5, 5.0)));
    r.image_boxes
        .push(ImageBoxSpec::new("image_left", inches(0.3, 0.3, 4.5, 6.9)));
    recipes.push(r);

    let mut r = recipe(
        "content_image_right",
        "Text content on left, image on right",
        &[CaseStudy, Feature, DetailedContent],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(0.5, 0.5, 4.5, 1.0))
            .size(24)
            .bold(),
    );
    r.body = Some(TextBoxSpec::new("body", inches(0.5, 1.7, 4.5, 5.0)));
    r.image_boxes
        .push(ImageBoxSpec::new("image_right", inches(5.2, 0.3, 4.5, 6.9)));
    recipes.push(r);

    let mut r = recipe(
        "statement_center",
        "Bold centered statement with optional subtitle",
        &[Statement],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(1.0, 2.0, 8.0, 2.5))
            .size(32)
            .bold()
            .centered()
            .anchor(VerticalAnchor::Middle),
    );
    r.body = Some(
        TextBoxSpec::new("body", inches(1.5, 4.8, 7.0, 1.5))
            .size(16)
            .centered()
            .color("666666"),
    );
    recipes.push(r);

    let mut r = recipe(
        "stat_default",
        "Single large statistic with label",
        &[Statistic],
    );
    r.title = Some(
        TextBoxSpec::new("stat_number", inches(1.0, 1.5, 8.0, 3.0))
            .size(72)
            .bold()
            .centered()
            .anchor(VerticalAnchor::Middle),
    );
    r.body = Some(
        TextBoxSpec::new("stat_label", inches(1.5, 4.5, 7.0, 2.0))
            .size(18)
            .centered()
            .color("666666"),
    );
    recipes.push(r);

    // 3x2 grid: number box above label box in each cell.
    let mut r = recipe(
        "stats_dashboard",
        "6-zone 3x2 grid for multiple statistics",
        &[StatsDashboard],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(0.5, 0.3, 9.0, 0.8))
            .size(24)
            .bold()
            .centered(),
    );
    for (row, row_y) in [1.5, 4.2].into_iter().enumerate() {
        for (col, col_x) in [0.5, 3.5, 6.5].into_iter().enumerate() {
            let zone = row * 3 + col + 1;
            r.extra_text_boxes.push(
                TextBoxSpec::new(
                    format!("Stat{}_Number", zone),
                    inches(col_x, row_y, 2.5, 1.2),
                )
                .size(36)
                .bold()
                .centered()
                .anchor(VerticalAnchor::Bottom),
            );
            r.extra_text_boxes.push(
                TextBoxSpec::new(
                    format!("Stat{}_Label", zone),
                    inches(col_x, row_y + 1.2, 2.5, 0.8),
                )
                .size(12)
                .centered()
                .color("666666"),
            );
        }
    }
    recipes.push(r);

    let mut r = recipe("quote_default", "Centered quote with attribution", &[Quote]);
    r.title = Some(
        TextBoxSpec::new("quote", inches(1.5, 1.5, 7.0, 3.5))
            .size(24)
            .italic()
            .centered()
            .anchor(VerticalAnchor::Middle),
    );
    r.body = Some(
        TextBoxSpec::new("attribution", inches(2.0, 5.2, 6.0, 1.0))
            .centered()
            .color("888888"),
    );
    recipes.push(r);

    let mut r = recipe(
        "two_column",
        "Two-column comparison layout",
        &[Comparison, NumberedStep],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(0.5, 0.5, 9.0, 0.8))
            .size(24)
            .bold()
            .centered(),
    );
    r.body = Some(TextBoxSpec::new("col_left", inches(0.5, 1.5, 4.2, 5.2)));
    r.extra_text_boxes
        .push(TextBoxSpec::new("col_right", inches(5.3, 1.5, 4.2, 5.2)));
    recipes.push(r);

    let mut r = recipe(
        "section_divider",
        "Section divider with large centered text",
        &[SectionHeader],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(1.0, 2.5, 8.0, 2.5))
            .size(40)
            .bold()
            .centered()
            .anchor(VerticalAnchor::Middle),
    );
    r.background = BackgroundSpec {
        color: "12285F".to_string(),
        image: false,
    };
    recipes.push(r);

    let mut r = recipe(
        "case_study_full",
        "Full case study with company, description, bullets, quote, attribution",
        &[CaseStudyFull],
    );
    r.title = Some(
        TextBoxSpec::new("company_name", inches(0.5, 0.3, 9.0, 0.8))
            .size(28)
            .bold(),
    );
    r.body = Some(TextBoxSpec::new("description", inches(0.5, 1.3, 5.0, 2.5)));
    r.extra_text_boxes.extend([
        TextBoxSpec::new("bullets", inches(0.5, 4.0, 5.0, 3.0)).size(13),
        TextBoxSpec::new("Quote", inches(6.0, 1.3, 3.5, 3.5))
            .size(16)
            .italic()
            .centered()
            .anchor(VerticalAnchor::Middle),
        TextBoxSpec::new("Attribution", inches(6.0, 5.0, 3.5, 1.0))
            .size(12)
            .centered()
            .color("888888"),
    ]);
    recipes.push(r);

    let mut r = recipe(
        "closing_cta",
        "Closing slide with call to action",
        &[Closing],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(1.0, 2.0, 8.0, 2.0))
            .size(32)
            .bold()
            .centered()
            .anchor(VerticalAnchor::Middle),
    );
    r.body = Some(
        TextBoxSpec::new("cta", inches(2.0, 4.5, 6.0, 1.5))
            .size(18)
            .centered()
            .color("009CDE"),
    );
    recipes.push(r);

    let mut r = recipe(
        "hero_photo",
        "Full-bleed photo background with text overlay",
        &[Feature, CaseStudy],
    );
    r.title = Some(
        TextBoxSpec::new("title", inches(0.7, 4.5, 8.6, 1.5))
            .size(32)
            .bold()
            .color("FFFFFF"),
    );
    r.body = Some(
        TextBoxSpec::new("body", inches(0.7, 6.0, 8.6, 1.0))
            .size(16)
            .color("FFFFFF"),
    );
    r.image_boxes
        .push(ImageBoxSpec::new("background", inches(0.0, 0.0, 10.0, 7.5)));
    r.background.image = true;
    recipes.push(r);

    recipes
}
