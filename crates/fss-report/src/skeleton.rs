//! Zero-valued result skeletons and overlaying a response onto them.

use serde_json::{Map, Value};

use fss_model::Layout;

/// Every metric path the service returns for the shoe layout.
pub const SHOE_METRIC_PATHS: &[&str] = &[
    "entradas",
    "saidas",
    "tempo_medio_sistema",
    "estoque_final.cortado",
    "processadas.corte",
    "processadas.costura",
    "tempo_medio_fila.corte",
    "tempo_medio_fila.costura",
    "tamanho_medio_fila.corte",
    "tamanho_medio_fila.costura",
    "tempo_ocioso.corte",
    "tempo_ocioso.costura",
    "tempo_util.corte",
    "tempo_util.costura",
];

/// Every metric path the service returns for the car layout.
pub const CAR_METRIC_PATHS: &[&str] = &[
    "quantidade_entradas",
    "quantidade_processadas.acabamento",
    "quantidade_processadas.colagem",
    "quantidade_processadas.flamagem",
    "quantidade_processadas.injetora",
    "quantidade_saidas",
    "tamanho_fila.acabamento",
    "tamanho_fila.colagem",
    "tamanho_fila.flamagem",
    "tempo_espera_filas.acabamento",
    "tempo_espera_filas.colagem",
    "tempo_espera_filas.flamagem",
    "tempo_medio_ciclo",
    "tempo_util_ocioso.injetora.ocioso",
    "tempo_util_ocioso.injetora.util",
    "tempo_util_ocioso.acabamento.ocioso",
    "tempo_util_ocioso.acabamento.util",
    "tempo_util_ocioso.colagem.ocioso",
    "tempo_util_ocioso.colagem.util",
    "tempo_util_ocioso.flamagem.ocioso",
    "tempo_util_ocioso.flamagem.util",
];

#[must_use]
pub fn metric_paths(layout: Layout) -> &'static [&'static str] {
    match layout {
        Layout::Shoe => SHOE_METRIC_PATHS,
        Layout::Car => CAR_METRIC_PATHS,
    }
}

/// Result object of `layout` with every metric set to 0.
#[must_use]
pub fn skeleton(layout: Layout) -> Value {
    let mut root = Map::new();
    for path in metric_paths(layout) {
        insert_zero(&mut root, path);
    }
    Value::Object(root)
}

fn insert_zero(root: &mut Map<String, Value>, path: &str) {
    let mut segments = path.split('.').peekable();
    let mut node = root;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            node.insert(segment.to_string(), Value::from(0));
            return;
        }
        let child = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !child.is_object() {
            *child = Value::Object(Map::new());
        }
        match child {
            Value::Object(map) => node = map,
            _ => return,
        }
    }
}

/// Overlay `response` onto `base`.
///
/// Nested objects are merged key by key; any other value in the response
/// replaces the base value. Keys absent from the response keep the base
/// value, so reading a skeleton path never misses. A non-object response
/// leaves the base unchanged.
#[must_use]
pub fn overlay(base: &Value, response: &Value) -> Value {
    match (base, response) {
        (Value::Object(base_map), Value::Object(response_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in response_map {
                let next = match merged.get(key) {
                    Some(existing @ Value::Object(_)) if value.is_object() => {
                        overlay(existing, value)
                    }
                    _ => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        (Value::Object(_), _) => base.clone(),
        _ => response.clone(),
    }
}
