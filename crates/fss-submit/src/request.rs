//! Wire payload sent to the simulation service.

use serde::Serialize;

use fss_model::{Layout, ParameterSet};

/// Body of `POST /simular`: `{ "layout": ..., "parametros": {...} }`.
///
/// Built once per submission attempt from the committed parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRequest {
    layout: Layout,
    parametros: ParameterSet,
}

impl SimulationRequest {
    /// Request for the layout the parameters belong to.
    #[must_use]
    pub fn new(parameters: ParameterSet) -> Self {
        Self {
            layout: parameters.layout(),
            parametros: parameters,
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn parameters(&self) -> &ParameterSet {
        &self.parametros
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shoe_request_body() {
        let request = SimulationRequest::new(ParameterSet::defaults(Layout::Shoe));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "layout": "shoe",
                "parametros": {
                    "estoque_inicial": 95,
                    "estoque_seg_costura": 50,
                    "tempo_simulacao": 480,
                    "media_corte": 4.4,
                    "std_corte": 0.2,
                    "tempo_setup_corte": 0.3,
                    "media_costura": 4.5,
                    "std_costura": 0.3,
                    "tempo_setup_costura": 0.2
                }
            })
        );
        let text = serde_json::to_string(&request).unwrap();
        assert!(text.contains(r#""estoque_inicial":95,"#));
    }

    #[test]
    fn test_car_request_layout() {
        let request = SimulationRequest::new(ParameterSet::defaults(Layout::Car));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["layout"], "car");
        assert_eq!(body["parametros"].as_object().unwrap().len(), 13);
    }
}
