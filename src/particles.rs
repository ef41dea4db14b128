use crate::constants::{PARTICLES_GLOBAL, PARTICLES_INSTANCES_GLOBAL};
use crate::core::particles::ParticlesConfig;
use crate::core::Theme;
use crate::theme;
use wasm_bindgen::{JsCast, JsValue};

/// Hand a fresh configuration to `particlesJS`, tearing down any instance
/// started earlier. A missing library or a failure inside it is logged and
/// otherwise ignored.
pub fn init(container_id: &str, theme: Theme) {
    let accent = theme::accent_color(theme);
    let config = ParticlesConfig::with_accent(&accent);
    if let Err(e) = try_init(container_id, &config) {
        log::warn!("[particles] init skipped: {e}");
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn get(target: &JsValue, key: &str) -> anyhow::Result<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).map_err(js_err)
}

fn try_init(container_id: &str, config: &ParticlesConfig) -> anyhow::Result<()> {
    let init_fn: js_sys::Function = get(&js_sys::global(), PARTICLES_GLOBAL)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("{PARTICLES_GLOBAL} not loaded"))?;
    let stopped = destroy_running()?;
    let json = config.to_json()?;
    let params = js_sys::JSON::parse(&json).map_err(js_err)?;
    init_fn
        .call2(&JsValue::NULL, &JsValue::from_str(container_id), &params)
        .map_err(js_err)?;
    log::debug!(
        "[particles] initialized #{container_id} accent={} (replaced {stopped})",
        config.accent()
    );
    Ok(())
}

fn destroy_running() -> anyhow::Result<u32> {
    let global = js_sys::global();
    let list = get(&global, PARTICLES_INSTANCES_GLOBAL)?;
    if list.is_undefined() {
        return Ok(0);
    }
    let instances = list
        .dyn_into::<js_sys::Array>()
        .unwrap_or_else(|_| js_sys::Array::new());
    for instance in instances.iter() {
        let vendors = get(&get(&get(&instance, "pJS")?, "fn")?, "vendors")?;
        let destroy: js_sys::Function = get(&vendors, "destroypJS")?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("instance without destroypJS"))?;
        destroy.call0(&vendors).map_err(js_err)?;
    }
    js_sys::Reflect::set(
        &global,
        &JsValue::from_str(PARTICLES_INSTANCES_GLOBAL),
        &js_sys::Array::new(),
    )
    .map_err(js_err)?;
    Ok(instances.length())
}
