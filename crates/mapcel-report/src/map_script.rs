//! MapLibre GL JS map code generation.

use mapcel_model::{Dataset, MapSettings};

use crate::common::{export_file_names, js_number, js_string};

/// Generates a standalone `map.js` for the exported datasets.
///
/// The script fetches `./<name>.geojson` for every dataset (in order),
/// creates a map in the element with id `map`, and on load adds one geojson
/// source `dataset-<i>` with a circle layer `dataset-<i>-circles` per
/// dataset. Disabled controls make the map non-interactive.
pub fn generate_map_script(datasets: &[Dataset], settings: &MapSettings) -> String {
    let file_names = export_file_names(datasets);

    let fetch_statements = file_names
        .iter()
        .enumerate()
        .map(|(index, file_name)| {
            format!(
                "  const response{index} = await fetch('./{file}');\n  \
                 const geojsonData{index} = await response{index}.json();",
                file = js_string(file_name),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let layer_statements = datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| layer_statement(index, dataset))
        .collect::<Vec<_>>()
        .join("\n\n");

    let interactive = if settings.enable_controls {
        ""
    } else {
        ",\n    interactive: false"
    };
    let controls = if settings.enable_controls {
        "  map.addControl(new maplibregl.NavigationControl());\n"
    } else {
        ""
    };

    format!(
        "// MapLibre GL JS Map Code
// Include this script after loading MapLibre GL JS library
// Required: <script src=\"https://unpkg.com/maplibre-gl@5/dist/maplibre-gl.js\"></script>
// Required: <link href=\"https://unpkg.com/maplibre-gl@5/dist/maplibre-gl.css\" rel=\"stylesheet\" />

(async function() {{
  // Load GeoJSON files
{fetch_statements}

  // Initialize map
  const map = new maplibregl.Map({{
    container: 'map',
    style: '{style}',
    center: [{lon}, {lat}],
    zoom: {zoom},
    minZoom: {min_zoom},
    maxZoom: {max_zoom}{interactive}
  }});

{controls}
  map.on('load', () => {{
{layer_statements}
  }});
}})();
",
        style = js_string(&settings.style_url),
        lon = js_number(settings.initial_center[0]),
        lat = js_number(settings.initial_center[1]),
        zoom = js_number(settings.initial_zoom),
        min_zoom = js_number(settings.min_zoom),
        max_zoom = js_number(settings.max_zoom),
    )
}

fn layer_statement(index: usize, dataset: &Dataset) -> String {
    let styling = dataset.styling();
    format!(
        "  map.addSource('dataset-{index}', {{
    type: 'geojson',
    data: geojsonData{index}
  }});

  map.addLayer({{
    id: 'dataset-{index}-circles',
    type: 'circle',
    source: 'dataset-{index}',
    paint: {{
      'circle-radius': {radius},
      'circle-color': '{color}',
      'circle-opacity': {opacity}
    }}
  }});",
        radius = js_number(styling.radius),
        color = js_string(&styling.color),
        opacity = js_number(styling.opacity),
    )
}
