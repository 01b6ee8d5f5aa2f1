use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::MapDocument;

/// Render the document as one self-contained Leaflet page.
///
/// Marker data is embedded as a JSON blob; the page script builds one
/// markerClusterGroup per layer, the standalone highlight marker, and
/// a layer control listing only the cluster overlays. Going through
/// JSON means place names from the API can't break out of the script
/// block or inject markup into popups.
pub fn render_html(doc: &MapDocument) -> Result<String> {
    let data = serde_json::to_string(doc).context("Failed to encode map data as JSON")?;
    // A literal "</script>" inside a place name would end the inline
    // script early. The escaped solidus is still valid JSON.
    let data = data.replace("</", r"<\/");

    Ok(PAGE_TEMPLATE.replace("__MAP_DATA__", &data))
}

/// Serialize the document and write it to `path`, overwriting any
/// existing file.
pub fn write_html(path: &Path, doc: &MapDocument) -> Result<()> {
    let page = render_html(doc)?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(page.as_bytes())?;
    writer.flush()?;

    Ok(())
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>Nearby Places</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css"/>
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css"/>
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>
<style>
html, body { height: 100%; margin: 0; }
#map { height: 100%; width: 100%; }
.poi-pin {
  width: 26px;
  height: 26px;
  border-radius: 50%;
  border: 2px solid #ffffff;
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.4);
  color: #ffffff;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 12px;
}
</style>
</head>
<body>
<div id="map"></div>
<script>
const MAP_DATA = __MAP_DATA__;

const map = L.map("map").setView(MAP_DATA.center, MAP_DATA.zoom);

L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors",
}).addTo(map);

function pinIcon(color, glyph) {
  return L.divIcon({
    className: "",
    html: '<div class="poi-pin" style="background:' + color + '"><i class="fa fa-' + glyph + '"></i></div>',
    iconSize: [26, 26],
    iconAnchor: [13, 13],
    popupAnchor: [0, -13],
  });
}

function escapeHtml(text) {
  const div = document.createElement("div");
  div.textContent = text;
  return div.innerHTML;
}

const overlays = {};
for (const layer of MAP_DATA.layers) {
  const cluster = L.markerClusterGroup();
  for (const place of layer.places) {
    L.marker([place.lat, place.lon], { icon: pinIcon(layer.color, layer.icon) })
      .bindPopup("<b>" + escapeHtml(layer.singular) + ":</b> " + escapeHtml(place.name))
      .addTo(cluster);
  }
  cluster.addTo(map);
  overlays[layer.label] = cluster;
}

const highlight = MAP_DATA.highlight;
L.marker([highlight.lat, highlight.lon], {
  icon: pinIcon(highlight.color, highlight.icon),
  zIndexOffset: 1000,
})
  .bindTooltip(escapeHtml(highlight.tooltip))
  .bindPopup("<b>" + escapeHtml(highlight.name) + "</b>")
  .addTo(map);

L.control.layers(null, overlays).addTo(map);
</script>
</body>
</html>
"#;
