use mapcel_model::{Dataset, MapSettings};

use crate::common::{export_file_names, js_number};

const HTML_TEMPLATE: &str = r#"```html
<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Mapcel Map</title>
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <script src="https://unpkg.com/maplibre-gl@5/dist/maplibre-gl.js"></script>
  <link href="https://unpkg.com/maplibre-gl@5/dist/maplibre-gl.css" rel="stylesheet" />
  <style>
    body { margin: 0; padding: 0; }
    #map { position: absolute; top: 0; bottom: 0; width: 100%; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script src="./map.js"></script>
</body>
</html>
```"#;

/// README shipped inside the export archive.
pub fn generate_readme(datasets: &[Dataset], settings: &MapSettings) -> String {
    let files = export_file_names(datasets)
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Mapcel Export

## Files Included
{files}
- map.js (MapLibre GL JS code)

## Usage Instructions

1. Create an HTML file with the following content:

{HTML_TEMPLATE}

2. Place this HTML file in the same directory as your GeoJSON files and map.js

3. Open the HTML file in a web browser (must be served via HTTP/HTTPS, not file://)
   - You can use a simple HTTP server like:
     - Python: `python -m http.server`
     - Node.js: `npx http-server`
     - VS Code: Use the \"Live Server\" extension

## Map Settings
- Style URL: {style_url}
- Min Zoom: {min_zoom}
- Max Zoom: {max_zoom}
- Controls Enabled: {controls}

Generated with Mapcel
",
        style_url = settings.style_url,
        min_zoom = js_number(settings.min_zoom),
        max_zoom = js_number(settings.max_zoom),
        controls = settings.enable_controls,
    )
}
