//! Request pipeline stages, outermost first:
//!
//! 1. `boundary`  - turns signaled errors and panics into JSON error bodies
//! 2. `security`  - fixed security response headers
//! 3. `assets`    - static files from the public directory, short-circuits on a hit
//! 4. `state`     - per-request constants (year, app name)
//! 5. `logger`    - method, path, status and latency once the response is known
//! 6. `not_found` - renders the 404 page when routing found nothing
//!
//! Router dispatch sits innermost. `main::build_app` wires the stages in this order.

pub mod assets;
pub mod boundary;
pub mod logger;
pub mod not_found;
pub mod security;
pub mod state;
