//! Page template for the rendered skill tree.
//!
//! The heading block is emitted twice: once above the canvas card and once as
//! the card caption. `output::strip_duplicate_heading` removes the first copy.

pub const VIS_NETWORK_CDNS: [&str; 2] = [
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js",
    "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.9/standalone/umd/vis-network.min.js",
];

/// Values substituted into the page. Everything is expected to be escaped already.
pub struct PageParts<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub bgcolor: &'a str,
    pub font_color: &'a str,
    pub width: &'a str,
    pub height: &'a str,
    pub nodes_json: &'a str,
    pub edges_json: &'a str,
    pub options_json: &'a str,
}

pub fn heading_block(heading: &str) -> String {
    format!("<center>\n<h1>{}</h1>\n</center>", heading)
}

pub fn page(parts: &PageParts<'_>) -> String {
    let heading = heading_block(parts.heading);
    let cdns = serde_json::json!(VIS_NETWORK_CDNS).to_string();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        html, body {{ height: 100%; margin: 0; }}
        body {{ background-color: {bgcolor}; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }}
        h1 {{ color: {font_color}; margin: 0.4em 0; }}
        .card {{ width: 100%; height: 100%; }}
        #skilltree {{
            width: {width};
            height: {height};
            background-color: {bgcolor};
            border: 1px solid lightgray;
            position: relative;
            float: left;
        }}
        #status {{ color: {font_color}; position: absolute; top: 50%; width: 100%; text-align: center; }}
    </style>
</head>
<body>
{heading}
<div class="card">
{heading}
    <div id="skilltree"><div id="status">Loading graph...</div></div>
</div>

<script>
    const CDNS = {cdns};
    const rawNodes = {nodes};
    const rawEdges = {edges};
    const options = {options};

    function loadScript(urls, idx) {{
        if (idx >= urls.length) {{
            document.getElementById('status').textContent = 'Could not load vis-network. Check your connection.';
            return;
        }}
        const s = document.createElement('script');
        s.src = urls[idx];
        s.onload = drawGraph;
        s.onerror = () => loadScript(urls, idx + 1);
        document.head.appendChild(s);
    }}

    function drawGraph() {{
        const container = document.getElementById('skilltree');
        container.innerHTML = '';
        const data = {{
            nodes: new vis.DataSet(rawNodes),
            edges: new vis.DataSet(rawEdges)
        }};
        return new vis.Network(container, data, options);
    }}

    loadScript(CDNS, 0);
</script>
</body>
</html>
"#,
        title = parts.title,
        bgcolor = parts.bgcolor,
        font_color = parts.font_color,
        width = parts.width,
        height = parts.height,
        heading = heading,
        cdns = cdns,
        nodes = parts.nodes_json,
        edges = parts.edges_json,
        options = parts.options_json,
    )
}
