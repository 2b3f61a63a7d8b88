use std::sync::{Arc, Mutex};

use esp_idf_svc::http::server::{Configuration, EspHttpServer};
use esp_idf_svc::http::Method;
use esp_idf_svc::io::{EspIOError, Write};
use log::info;

use drive_control::state::ControlUpdate;

use crate::shared_drive::SharedDrive;

/// Single-page control UI pushing `/control` requests on every slider move.
const CONTROL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Rover Control</title>
<style>
body{font-family:system-ui,sans-serif;margin:0;padding:16px;background:#10141f;color:#e6eaf2}
h1{font-size:1.3rem;margin:0 0 12px}
.card{background:#1a2030;border:1px solid #252d42;border-radius:10px;padding:14px;margin-bottom:14px}
label{display:block;margin:10px 0 4px;font-weight:600}
input[type=range]{width:100%}
.value{font-variant-numeric:tabular-nums;opacity:.85}
button{background:#2f6fed;color:#fff;border:none;padding:9px 14px;border-radius:8px;font-weight:600;cursor:pointer}
#status{font-size:.9rem;opacity:.8}
</style>
</head>
<body>
<h1>Rover Control</h1>
<div class="card">
<label for="throttle">Throttle (0-100%)</label>
<input id="throttle" type="range" min="0" max="100" value="0">
<div class="value" id="throttleVal">0%</div>
<label for="steer">Steer (-100..100)</label>
<input id="steer" type="range" min="-100" max="100" value="0">
<div class="value" id="steerVal">0</div>
<label for="elev">Elevator (0-180&deg;)</label>
<input id="elev" type="range" min="0" max="180" value="90">
<div class="value" id="elevVal">90&deg;</div>
<button id="center">Center Elevator</button>
</div>
<div class="card"><div id="status">Ready</div></div>
<script>
const sliders = ['throttle', 'steer', 'elev'].map(id => document.getElementById(id));
const statusEl = document.getElementById('status');

function refreshLabels() {
  const [throttle, steer, elev] = sliders;
  document.getElementById('throttleVal').textContent = throttle.value + '%';
  document.getElementById('steerVal').textContent = steer.value;
  document.getElementById('elevVal').textContent = elev.value + '°';
}

async function push() {
  refreshLabels();
  const params = new URLSearchParams();
  for (const slider of sliders) params.set(slider.id, slider.value);
  try {
    const res = await fetch('/control?' + params.toString());
    statusEl.textContent = await res.text();
  } catch (err) {
    statusEl.textContent = 'Board unreachable';
  }
}

for (const slider of sliders) slider.addEventListener('input', push);
document.getElementById('center').addEventListener('click', () => {
  sliders[2].value = 90;
  push();
});

push();
</script>
</body>
</html>
"#;

/// HTTP control server. Requests are dispatched one at a time, so each
/// update runs its parse/clamp/store/actuate/respond pipeline to completion
/// before the next is accepted.
pub struct ControlServer {
    _server: EspHttpServer<'static>,
}

impl ControlServer {
    pub fn new(
        port: u16,
        drive: Arc<Mutex<SharedDrive>>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let server_config = Configuration {
            http_port: port,
            uri_match_wildcard: true,
            ..Default::default()
        };

        let mut server = EspHttpServer::new(&server_config)?;

        server.fn_handler("/", Method::Get, |req| -> Result<(), EspIOError> {
            let mut response = req.into_response(
                200,
                None,
                &[("Content-Type", "text/html; charset=utf-8")],
            )?;
            response.write_all(CONTROL_PAGE.as_bytes())?;
            Ok(())
        })?;

        server.fn_handler("/control", Method::Get, move |req| -> Result<(), EspIOError> {
            let query = req.uri().split('?').nth(1).unwrap_or("");
            let update = ControlUpdate::from_query(query);

            let status = {
                let mut drive = drive.lock().unwrap();
                drive.handle_update(&update)
            };
            info!("{}", status);

            let mut response = req.into_response(200, None, &[("Content-Type", "text/plain")])?;
            response.write_all(status.as_bytes())?;
            Ok(())
        })?;

        // Registered last; the wildcard matcher takes the first handler that
        // fits, so this only sees unrouted URIs.
        server.fn_handler("/*", Method::Get, |req| -> Result<(), EspIOError> {
            let mut response = req.into_response(404, None, &[("Content-Type", "text/plain")])?;
            response.write_all(b"Not found")?;
            Ok(())
        })?;

        Ok(ControlServer { _server: server })
    }
}
