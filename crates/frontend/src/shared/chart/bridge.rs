use super::config::ChartConfig;
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

/// Whether the host page loaded Chart.js (`window.Chart`)
pub fn chart_library_loaded() -> bool {
    chart_constructor().is_ok()
}

fn chart_constructor() -> Result<Function, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let ctor = Reflect::get(&window, &JsValue::from_str("Chart"))?;
    if !ctor.is_function() {
        return Err(JsValue::from_str("Chart.js is not loaded"));
    }
    ctor.dyn_into()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Child object at `key`, created when missing
fn child_object(parent: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    let key = JsValue::from_str(key);
    let existing = Reflect::get(parent, &key)?;
    if existing.is_object() {
        return Ok(existing);
    }
    let created: JsValue = Object::new().into();
    Reflect::set(parent, &key, &created)?;
    Ok(created)
}

fn install_callbacks(config: &ChartConfig, js_config: &JsValue) -> Result<(), JsValue> {
    let options = child_object(js_config, "options")?;

    if let Some(format) = config.tooltip {
        let plugins = child_object(&options, "plugins")?;
        let tooltip = child_object(&plugins, "tooltip")?;
        let callbacks = child_object(&tooltip, "callbacks")?;
        let label = Function::new_with_args("ctx", format.js_body());
        Reflect::set(&callbacks, &JsValue::from_str("label"), &label)?;
    }

    if let Some((axis, format)) = config.ticks {
        let scales = child_object(&options, "scales")?;
        let axis = child_object(&scales, axis)?;
        let ticks = child_object(&axis, "ticks")?;
        let callback = Function::new_with_args("v", format.js_body());
        Reflect::set(&ticks, &JsValue::from_str("callback"), &callback)?;
    }

    Ok(())
}

/// Chart instance owned by a component; destroyed on drop
pub struct ChartHandle {
    instance: JsValue,
}

impl ChartHandle {
    /// Replace the values of one dataset and animate to them
    pub fn replace_data(&self, dataset: u32, values: &[f64]) -> Result<(), JsValue> {
        let data = Reflect::get(&self.instance, &JsValue::from_str("data"))?;
        let datasets: Array = Reflect::get(&data, &JsValue::from_str("datasets"))?.dyn_into()?;
        let target = datasets.get(dataset);
        if target.is_undefined() {
            return Err(JsValue::from_str("dataset index out of range"));
        }
        Reflect::set(&target, &JsValue::from_str("data"), &to_js(&values)?)?;
        self.update("active")
    }

    /// Pull one doughnut segment out by `offset` px (0 resets it)
    pub fn set_segment_offset(&self, index: u32, offset: f64) -> Result<(), JsValue> {
        let meta_fn: Function =
            Reflect::get(&self.instance, &JsValue::from_str("getDatasetMeta"))?.dyn_into()?;
        let meta = meta_fn.call1(&self.instance, &JsValue::from_f64(0.0))?;
        let elements: Array = Reflect::get(&meta, &JsValue::from_str("data"))?.dyn_into()?;
        let element = elements.get(index);
        if element.is_undefined() {
            return Ok(());
        }
        let options = child_object(&element, "options")?;
        Reflect::set(&options, &JsValue::from_str("offset"), &JsValue::from_f64(offset))?;
        self.update("none")
    }

    fn update(&self, mode: &str) -> Result<(), JsValue> {
        let update: Function =
            Reflect::get(&self.instance, &JsValue::from_str("update"))?.dyn_into()?;
        update.call1(&self.instance, &JsValue::from_str(mode))?;
        Ok(())
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        let destroy = Reflect::get(&self.instance, &JsValue::from_str("destroy"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(destroy) = destroy {
            let _ = destroy.call0(&self.instance);
        }
    }
}

/// `new Chart(canvas, config)`
pub fn create_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<ChartHandle, JsValue> {
    let ctor = chart_constructor()?;
    let js_config = to_js(config)?;
    install_callbacks(config, &js_config)?;

    let args = Array::of2(canvas.as_ref(), &js_config);
    let instance = Reflect::construct(&ctor, &args)?;
    log::debug!("Created {:?} chart", config.kind);

    Ok(ChartHandle { instance })
}
