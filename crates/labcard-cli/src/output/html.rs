//! HTML report page
//!
//! Renders the whole catalog as one self-contained page: a card per result and
//! a `<template>` per result holding its pre-rendered detail view. A small
//! inline script moves a template into the modal when a card is expanded.

use labcard_core::catalog::Catalog;
use labcard_core::model::{Category, TestResult};
use labcard_core::view::{classify, Block, RenderModel};

/// Render the full report page.
pub fn render_page(catalog: &Catalog) -> String {
    let report = catalog.report();

    let sections: String = Category::ALL
        .iter()
        .map(|&c| render_section(catalog, c))
        .collect();

    let templates: String = catalog
        .results()
        .iter()
        .map(|r| {
            format!(
                r#"<template id="detail-{id}">{body}</template>
"#,
                id = html_escape(&r.id),
                body = render_fragment(&labcard_core::project(r)),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{title}</h1>
            <p class="subject">{subject}</p>
        </header>
        {sections}
    </div>
    <div id="detailModal" class="modal hidden" role="dialog" aria-modal="true" aria-labelledby="modalTitle">
        <div class="modal-content">
            <div class="modal-header">
                <h3 id="modalTitle"></h3>
                <button class="modal-close" aria-label="Close">&times;</button>
            </div>
            <div id="modalBody" class="modal-body"></div>
        </div>
    </div>
{templates}    <script>{js}</script>
</body>
</html>"#,
        title = html_escape(&report.title),
        subject = html_escape(&report.subject),
        css = inline_css(),
        js = inline_javascript(),
    )
}

fn render_section(catalog: &Catalog, category: Category) -> String {
    let cards: String = catalog.by_category(category).map(render_card).collect();
    if cards.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="report-section">
            <h2>{heading}</h2>
            <div class="card-grid">{cards}</div>
        </section>"#,
        heading = category.heading(),
    )
}

fn render_card(result: &TestResult) -> String {
    let severity = classify(&result.status);
    format!(
        r#"
                <div class="card {category}-card" data-id="{id}" data-title="{name}">
                    <h3>{name}</h3>
                    <div class="card-value">{value}</div>
                    <div class="card-range">Reference: {range}</div>
                    <span class="status {status_class}">{status}</span>
                    <p class="card-interpretation">{interpretation}</p>
                    <button class="expand-btn">Learn more</button>
                </div>"#,
        category = result.category,
        id = html_escape(&result.id),
        name = html_escape(&result.name),
        value = html_escape(&result.value),
        range = html_escape(&result.reference_range),
        status_class = severity.css_class(),
        status = html_escape(&result.status),
        interpretation = html_escape(&result.interpretation),
    )
}

/// Render the modal body for one detail view.
pub fn render_fragment(model: &RenderModel) -> String {
    let mut html = format!(
        r#"<div class="modal-definition"><h4>{heading}</h4><p>{body}</p></div>"#,
        heading = html_escape(&model.definition.heading),
        body = html_escape(&model.definition.body),
    );

    html.push_str(r#"<div class="modal-details">"#);
    for fact in &model.facts {
        let mut classes = String::from("detail-value");
        if let Some(severity) = fact.severity {
            classes.push(' ');
            classes.push_str(severity.css_class());
        }
        if fact.highlight {
            classes.push_str(" critical-value");
        }
        html.push_str(&format!(
            r#"<div class="detail-item"><span class="detail-label">{label}:</span><span class="{classes}">{value}</span></div>"#,
            label = html_escape(&fact.label),
            value = html_escape(&fact.value),
        ));
    }
    html.push_str("</div>");

    for block in &model.blocks {
        html.push_str(&render_block(block));
    }

    html
}

fn render_block(block: &Block) -> String {
    let heading = match block.icon() {
        Some(icon) => format!("{} {}:", icon, block.heading()),
        None => format!("{}:", block.heading()),
    };
    let content = match block {
        Block::KeyFacts { items } | Block::Symptoms { items } => {
            let lis: String = items
                .iter()
                .map(|i| format!("<li>{}</li>", html_escape(i)))
                .collect();
            format!("<ul>{lis}</ul>")
        }
        Block::UrgentAction { text }
        | Block::PatientSummary { text }
        | Block::RangeExplanation { text }
        | Block::Monitoring { text } => format!("<p>{}</p>", html_escape(text)),
    };
    let accent = block
        .accent()
        .map(|s| format!(" alert {}", s.css_class()))
        .unwrap_or_default();
    format!(
        r#"<div class="modal-block block-{kind}{accent}"><h4>{heading}</h4>{content}</div>"#,
        kind = block.kind().replace('_', "-"),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; background: #fcfcf9; color: #13343b; }
.container { max-width: 1100px; margin: 0 auto; padding: 24px; }
header h1 { margin-bottom: 4px; }
.subject { color: #626c71; margin-top: 0; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
.card { background: #fff; border: 1px solid #e5e5e0; border-radius: 8px; padding: 16px; }
.card h3 { margin: 0 0 8px; font-size: 16px; }
.card-value { font-size: 22px; font-weight: 600; }
.card-range { color: #626c71; font-size: 13px; margin: 4px 0 8px; }
.card-interpretation { font-size: 14px; }
.expand-btn { border: 1px solid #21808d; background: none; color: #21808d; border-radius: 6px; padding: 6px 12px; cursor: pointer; }
.status { display: inline-block; padding: 2px 8px; border-radius: 999px; font-size: 12px; font-weight: 500; }
.status--success { background: rgba(33, 128, 141, 0.15); color: #21808d; }
.status--warning { background: rgba(168, 75, 47, 0.15); color: #a84b2f; }
.status--error { background: rgba(192, 21, 47, 0.15); color: #c0152f; }
.status--info { background: rgba(98, 108, 113, 0.15); color: #626c71; }
.modal { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; padding: 16px; }
.modal.hidden { display: none; }
.modal-content { background: #fff; border-radius: 12px; max-width: 640px; width: 100%; max-height: 90vh; overflow-y: auto; padding: 24px; }
.modal-header { display: flex; justify-content: space-between; align-items: center; }
.modal-close { border: none; background: none; font-size: 24px; cursor: pointer; }
.detail-item { display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #e5e5e0; }
.detail-label { color: #626c71; }
.critical-value { color: #c0152f; font-weight: 700; }
.modal-block { margin: 16px 0; }
.alert { padding: 16px; border-radius: 8px; border-left: 4px solid currentColor; }
.alert h4 { margin-top: 0; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    const modal = document.getElementById('detailModal');
    const modalTitle = document.getElementById('modalTitle');
    const modalBody = document.getElementById('modalBody');
    const modalClose = modal.querySelector('.modal-close');

    function openDetail(card) {
        const template = document.getElementById('detail-' + card.dataset.id);
        if (!template) return;
        modalTitle.textContent = card.dataset.title;
        modalBody.replaceChildren(template.content.cloneNode(true));
        modal.classList.remove('hidden');
        document.body.style.overflow = 'hidden';
        modalClose.focus();
    }

    function closeDetail() {
        modal.classList.add('hidden');
        modalBody.replaceChildren();
        document.body.style.overflow = '';
    }

    document.querySelectorAll('.card .expand-btn').forEach(function (btn) {
        btn.addEventListener('click', function (e) {
            e.stopPropagation();
            openDetail(btn.closest('.card'));
        });
    });
    modalClose.addEventListener('click', closeDetail);
    modal.addEventListener('click', function (e) {
        if (e.target === modal) closeDetail();
    });
    document.addEventListener('keydown', function (e) {
        if (e.key === 'Escape' && !modal.classList.contains('hidden')) closeDetail();
    });
})();
"#
}
