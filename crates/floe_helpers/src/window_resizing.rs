#[cfg(target_arch = "wasm32")]
pub fn handle_browser_resize(
    mut primary_query: bevy::ecs::system::Query<
        &mut bevy::window::Window,
        bevy::ecs::query::With<bevy::window::PrimaryWindow>,
    >,
) {
    let Some(target) = browser_inner_size() else {
        return;
    };

    // wgpu rejects surfaces larger than the maximum texture extent, which
    // is 2048 on some mobile GPUs.
    const MAX_WIDTH: f32 = 2048.0;
    const MAX_HEIGHT: f32 = 2048.0;

    for mut window in &mut primary_query {
        if (window.resolution.width() - target.0).abs() > f32::EPSILON
            || (window.resolution.height() - target.1).abs() > f32::EPSILON
        {
            window
                .resolution
                .set(target.0.min(MAX_WIDTH), target.1.min(MAX_HEIGHT));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_inner_size() -> Option<(f32, f32)> {
    let wasm_window = web_sys::window()?;
    let width = wasm_window.inner_width().ok()?.as_f64()?;
    let height = wasm_window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}
