//! Page layout: title, the two chart panes and the footer.

use serde_json::Value;

pub const PAGE_TITLE: &str = "Émissions mondiales de CO₂ par pays et par an (période 1970–2024)";
pub const BAR_HEADING: &str = "Top 10 des pays les plus émetteurs de CO₂ par an";
pub const SOURCE_TEXT: &str = "Source : EDGAR - Emissions Database for Global Atmospheric Research";
pub const AUTHOR_CREDIT: &str = "Dashboard developed by Mahmoud TOURKI";
pub const CONTACT_EMAIL: &str = "mahmoud.tourki24@gmail.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mahmoud-tourki-b228b9147/";
pub const EMAIL_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/732/732200.png";
pub const LINKEDIN_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/174/174857.png";
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the full dashboard page around two Plotly figures.
pub fn render_page(map_figure: &Value, bar_figure: &Value) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="color-scheme" content="dark">
    <title>{title}</title>
    <style>{css}</style>
    <script src="{plotly}"></script>
</head>
<body>
    {header}
    <main class="panes">
        <section class="pane pane-map"><div id="map" class="chart"></div></section>
        <section class="pane pane-bar">
            <h3>{bar_heading}</h3>
            <div id="bar" class="chart"></div>
        </section>
    </main>
    {footer}
    <script>
        const mapFigure = {map_json};
        const barFigure = {bar_json};
        Plotly.newPlot("map", {{ ...mapFigure, config: {{ responsive: true }} }});
        Plotly.newPlot("bar", {{ ...barFigure, config: {{ responsive: true, displayModeBar: false }} }});
    </script>
</body>
</html>"#,
        title = html_escape(PAGE_TITLE),
        css = inline_css(),
        plotly = html_escape(PLOTLY_JS_URL),
        header = render_header(),
        bar_heading = html_escape(BAR_HEADING),
        footer = render_footer(),
        map_json = script_json(map_figure),
        bar_json = script_json(bar_figure),
    )
}

fn render_header() -> String {
    format!(r#"<header><h1>{}</h1></header>"#, html_escape(PAGE_TITLE))
}

fn render_footer() -> String {
    format!(
        r#"<footer>
        <p class="source">{source}</p>
        <div class="credits">
            <span class="author">{author}</span>
            <a href="mailto:{email}"><img src="{email_icon}" alt="">{email}</a>
            <a href="{linkedin}" target="_blank" rel="noopener"><img src="{linkedin_icon}" alt="">LinkedIn Profile</a>
        </div>
    </footer>"#,
        source = html_escape(SOURCE_TEXT),
        author = html_escape(AUTHOR_CREDIT),
        email = html_escape(CONTACT_EMAIL),
        email_icon = html_escape(EMAIL_ICON_URL),
        linkedin = html_escape(LINKEDIN_URL),
        linkedin_icon = html_escape(LINKEDIN_ICON_URL),
    )
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; background: #111111; color: white; min-height: 100vh; padding: 20px;
       box-sizing: border-box; display: flex; flex-direction: column; font-family: Arial, sans-serif; }
header { width: 100%; }
h1 { text-align: center; font-family: "Arial Black", Arial, sans-serif; font-size: 42px; margin: 0 0 30px; }
.panes { display: flex; height: 75vh; gap: 20px; flex: 1; }
.pane { border-radius: 15px; border: 1px solid #333; box-sizing: border-box; }
.pane-map { width: 72%; overflow: hidden; }
.pane-bar { width: 28%; background: #1a1a1a; padding: 20px; }
.pane-bar h3 { text-align: center; font-family: "Arial Black", Arial, sans-serif; font-size: 24px; margin: 0 0 20px; }
.pane-map .chart { height: 100%; }
.pane-bar .chart { height: 85%; }
footer { margin-top: 40px; padding: 20px; border-top: 1px solid #333; display: flex;
         flex-direction: column; align-items: center; justify-content: center; }
footer .source { font-size: 13px; opacity: 0.6; margin: 0 0 15px; }
footer .credits { display: flex; justify-content: center; align-items: center; gap: 35px; flex-wrap: wrap; }
footer .author { font-size: 16px; font-weight: bold; }
footer a { color: #bbb; text-decoration: none; font-size: 14px; display: flex; align-items: center; }
footer img { height: 22px; margin-right: 10px; }
"#
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize JSON for inclusion inside a `<script>` element.
///
/// `<`, `>` and `&` are written as unicode escapes so no string value can
/// close the element; the result is still valid JSON and JavaScript.
fn script_json(value: &Value) -> String {
    value
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_contains_both_panes_and_footer() {
        let page = render_page(&json!({"data": []}), &json!({"data": []}));

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<meta name="color-scheme" content="dark">"#));
        assert!(page.contains(r#"id="map""#));
        assert!(page.contains(r#"id="bar""#));
        assert!(page.contains("width: 72%"));
        assert!(page.contains("width: 28%"));
        assert!(page.contains(BAR_HEADING));
        assert!(page.contains("Source : EDGAR"));
        assert!(page.contains("mailto:mahmoud.tourki24@gmail.com"));
        assert!(page.contains(LINKEDIN_ICON_URL));
    }

    #[test]
    fn embedded_json_cannot_close_the_script() {
        let fig = json!({"name": "</script><b>x</b>"});
        let out = script_json(&fig);

        assert!(!out.contains("</script>"));
        let back: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(back, fig);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
