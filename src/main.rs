#[cfg(target_arch = "wasm32")]
fn main() {
    hrms_lite_frontend::start();
}

// The app only runs in the browser; the native target exists for tests.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
