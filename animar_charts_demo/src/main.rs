// Copyright 2026 the Animar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated bar chart demos for `animar_core`.
mod html;
mod svg;

use animar_charts::{AnimationSpec, BarChartAnimator, Encoding, HighlightEffect, Row};

const WIDTH: f64 = 460.0;
const HEIGHT: f64 = 340.0;

fn main() {
    let sections = vec![
        superposition_demo(),
        difference_demo(),
        stacked_superposition_demo(),
        stacked_difference_demo(),
        placeholder_demo(),
    ];

    let html = html::render_report("Animar charts demo", &sections);
    std::fs::write("animar_charts_demo.html", html).expect("write animar_charts_demo.html");
    println!("wrote animar_charts_demo.html");
}

fn city_rows() -> Vec<Row> {
    vec![
        Row::new().with("city", "Lisbon").with("population", 545.0),
        Row::new().with("city", "Porto").with("population", 232.0),
        Row::new().with("city", "Braga").with("population", 193.0),
        Row::new().with("city", "Coimbra").with("population", 143.0),
        Row::new().with("city", "Faro").with("population", 68.0),
    ]
}

fn city_year_rows() -> Vec<Row> {
    let mut rows = Vec::new();
    let by_year: [(&str, [f64; 5]); 2] = [
        ("2015", [531.0, 221.0, 181.0, 139.0, 61.0]),
        ("2025", [545.0, 232.0, 193.0, 143.0, 68.0]),
    ];
    let cities = ["Lisbon", "Porto", "Braga", "Coimbra", "Faro"];
    for (year, values) in by_year {
        for (city, value) in cities.iter().zip(values) {
            rows.push(
                Row::new()
                    .with("city", *city)
                    .with("population", value)
                    .with("year", year),
            );
        }
    }
    rows
}

fn render_section(
    title: &'static str,
    description: &'static str,
    rows: &[Row],
    encoding: &Encoding,
    animation: &AnimationSpec,
) -> html::HtmlSection {
    let scene = BarChartAnimator::new(WIDTH, HEIGHT).render(rows, encoding, animation);
    html::HtmlSection {
        title,
        description,
        svg: svg::scene_to_svg(&scene, WIDTH, HEIGHT),
    }
}

fn superposition_demo() -> html::HtmlSection {
    render_section(
        "Superposition",
        "Lisbon and Porto get a yellow outline; everything else dims to light gray.",
        &city_rows(),
        &Encoding::new("city", "population"),
        &AnimationSpec::new(HighlightEffect::Superposition, 1000.0)
            .with_categories("Lisbon", "Porto"),
    )
}

fn difference_demo() -> html::HtmlSection {
    render_section(
        "Difference",
        "Dashed reference lines grow from the tops of the two selected bars toward the value axis.",
        &city_rows(),
        &Encoding::new("city", "population"),
        &AnimationSpec::new(HighlightEffect::Difference, 1000.0)
            .with_categories("Lisbon", "Braga"),
    )
}

fn stacked_superposition_demo() -> html::HtmlSection {
    render_section(
        "Stacked superposition",
        "With a series channel the bars stack per category; selected stacks keep their series colors under the outline.",
        &city_year_rows(),
        &Encoding::new("city", "population").with_color("year"),
        &AnimationSpec::new(HighlightEffect::Superposition, 1000.0)
            .with_categories("Porto", "Coimbra"),
    )
}

fn stacked_difference_demo() -> html::HtmlSection {
    render_section(
        "Stacked difference",
        "Reference lines sit at the stack totals of the selected categories. The default selection is the first two categories.",
        &city_year_rows(),
        &Encoding::new("city", "population").with_color("year"),
        &AnimationSpec::new(HighlightEffect::Difference, 1000.0),
    )
}

fn placeholder_demo() -> html::HtmlSection {
    // An encoding without a value field renders the pink placeholder.
    render_section(
        "Invalid encoding",
        "A chart with an incomplete encoding renders a full-surface placeholder instead of a broken plot.",
        &city_rows(),
        &Encoding::new("city", ""),
        &AnimationSpec::new(HighlightEffect::Difference, 1000.0),
    )
}
