use crate::domain::model::{AggregateLink, RelatedLink, RelatedLinks};

/// Heading prefix of the injected section. A page containing it is never touched again.
pub const SECTION_MARKER: &str = "Other Locksmith Services in";

const CARD_STYLE: &str = "display:flex;align-items:center;gap:12px;padding:20px;background:#fff;border-radius:12px;text-decoration:none;color:#0f1419;box-shadow:0 2px 8px rgba(0,0,0,0.08);transition:transform 0.2s,box-shadow 0.2s;";
const CARD_HOVER: &str = "this.style.transform='translateY(-2px)';this.style.boxShadow='0 4px 12px rgba(0,0,0,0.12)'";
const CARD_LEAVE: &str = "this.style.transform='';this.style.boxShadow='0 2px 8px rgba(0,0,0,0.08)'";
const AGGREGATE_STYLE: &str = "color:#e63946;font-weight:600;text-decoration:none;";

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_card(link: &RelatedLink) -> String {
    format!(
        r#"
                <a href="{href}" style="{style}" onmouseover="{hover}" onmouseout="{leave}">
                    <span style="font-size:28px;">{icon}</span>
                    <div><strong style="font-size:16px;">{title}</strong><br><small style="color:#6c757d;">{description}</small></div>
                </a>"#,
        href = html_escape(&link.target),
        style = CARD_STYLE,
        hover = CARD_HOVER,
        leave = CARD_LEAVE,
        icon = html_escape(&link.icon),
        title = html_escape(&link.title),
        description = html_escape(&link.description),
    )
}

fn render_aggregate(aggregate: &AggregateLink) -> String {
    format!(
        r#"<a href="{}" style="{}">← View All {} Locksmith Services</a>"#,
        html_escape(&aggregate.target),
        AGGREGATE_STYLE,
        html_escape(&aggregate.city_name),
    )
}

/// Renders the "Related Services" section, or an empty string when no sibling service page exists.
pub fn render_fragment(related: &RelatedLinks, city_name: &str) -> String {
    if related.is_empty() {
        return String::new();
    }

    let cards: String = related.links.iter().map(render_card).collect();
    let aggregate = related
        .aggregate
        .as_ref()
        .map(render_aggregate)
        .unwrap_or_default();

    format!(
        r#"
    <!-- Related Services -->
    <section style="padding:60px 0;background:#f8f9fa;">
        <div style="max-width:1200px;margin:0 auto;padding:0 20px;">
            <h2 style="text-align:center;margin-bottom:32px;font-size:28px;color:#0f1419;">{marker} {city}</h2>
            <div style="display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));gap:20px;">{cards}
            </div>
            <p style="text-align:center;margin-top:28px;">{aggregate}</p>
        </div>
    </section>
"#,
        marker = SECTION_MARKER,
        city = html_escape(city_name),
        cards = cards,
        aggregate = aggregate,
    )
}
