//! Fixed report sections per layout.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use fss_model::{Layout, SimulationResult, format_number};

use crate::flatten::{format_fixed, lookup};
use crate::skeleton::{overlay, skeleton};

/// How one metric line is read and displayed.
#[derive(Debug, Clone, Copy)]
enum Metric {
    /// Piece count, shown as a plain number.
    Count(&'static str),
    /// Two-decimal value with a unit.
    Fixed(&'static str, &'static str),
    /// Busy and idle minutes of one process.
    BusyIdle {
        busy: &'static str,
        idle: &'static str,
    },
}

struct LineSpec {
    label: Option<&'static str>,
    metric: Metric,
}

struct SectionSpec {
    heading: &'static str,
    lines: &'static [LineSpec],
}

const fn line(label: &'static str, metric: Metric) -> LineSpec {
    LineSpec {
        label: Some(label),
        metric,
    }
}

const fn single(metric: Metric) -> LineSpec {
    LineSpec {
        label: None,
        metric,
    }
}

const SHOE_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        heading: "Parts that entered the system",
        lines: &[single(Metric::Count("entradas"))],
    },
    SectionSpec {
        heading: "Parts that left the system",
        lines: &[single(Metric::Count("saidas"))],
    },
    SectionSpec {
        heading: "Lead time",
        lines: &[single(Metric::Fixed("tempo_medio_sistema", "min/un"))],
    },
    SectionSpec {
        heading: "Processed parts",
        lines: &[
            line("Cutting", Metric::Count("processadas.corte")),
            line("Sewing", Metric::Count("processadas.costura")),
        ],
    },
    SectionSpec {
        heading: "Busy and idle time per process",
        lines: &[
            line(
                "Cutting",
                Metric::BusyIdle {
                    busy: "tempo_util.corte",
                    idle: "tempo_ocioso.corte",
                },
            ),
            line(
                "Sewing",
                Metric::BusyIdle {
                    busy: "tempo_util.costura",
                    idle: "tempo_ocioso.costura",
                },
            ),
        ],
    },
    SectionSpec {
        heading: "Average queue wait",
        lines: &[
            line("Cutting", Metric::Fixed("tempo_medio_fila.corte", "min")),
            line("Sewing", Metric::Fixed("tempo_medio_fila.costura", "min")),
        ],
    },
    SectionSpec {
        heading: "Average queue size",
        lines: &[
            line("Cutting", Metric::Fixed("tamanho_medio_fila.corte", "parts")),
            line("Sewing", Metric::Fixed("tamanho_medio_fila.costura", "parts")),
        ],
    },
];

const CAR_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        heading: "Parts that entered the system",
        lines: &[single(Metric::Count("quantidade_entradas"))],
    },
    SectionSpec {
        heading: "Parts that left the system",
        lines: &[single(Metric::Count("quantidade_saidas"))],
    },
    SectionSpec {
        heading: "Lead time",
        lines: &[single(Metric::Fixed("tempo_medio_ciclo", "min/un"))],
    },
    SectionSpec {
        heading: "Processed quantity",
        lines: &[
            line("Injection", Metric::Count("quantidade_processadas.injetora")),
            line("Finishing", Metric::Count("quantidade_processadas.acabamento")),
            line("Flaming", Metric::Count("quantidade_processadas.flamagem")),
            line("Gluing", Metric::Count("quantidade_processadas.colagem")),
        ],
    },
    SectionSpec {
        heading: "Busy and idle time per process",
        lines: &[
            line(
                "Injection",
                Metric::BusyIdle {
                    busy: "tempo_util_ocioso.injetora.util",
                    idle: "tempo_util_ocioso.injetora.ocioso",
                },
            ),
            line(
                "Finishing",
                Metric::BusyIdle {
                    busy: "tempo_util_ocioso.acabamento.util",
                    idle: "tempo_util_ocioso.acabamento.ocioso",
                },
            ),
            line(
                "Flaming",
                Metric::BusyIdle {
                    busy: "tempo_util_ocioso.flamagem.util",
                    idle: "tempo_util_ocioso.flamagem.ocioso",
                },
            ),
            line(
                "Gluing",
                Metric::BusyIdle {
                    busy: "tempo_util_ocioso.colagem.util",
                    idle: "tempo_util_ocioso.colagem.ocioso",
                },
            ),
        ],
    },
    SectionSpec {
        heading: "Queue wait time",
        lines: &[
            line("Finishing", Metric::Fixed("tempo_espera_filas.acabamento", "min")),
            line("Flaming", Metric::Fixed("tempo_espera_filas.flamagem", "min")),
            line("Gluing", Metric::Fixed("tempo_espera_filas.colagem", "min")),
        ],
    },
    SectionSpec {
        heading: "Queue size",
        lines: &[
            line("Finishing", Metric::Fixed("tamanho_fila.acabamento", "parts")),
            line("Flaming", Metric::Fixed("tamanho_fila.flamagem", "parts")),
            line("Gluing", Metric::Fixed("tamanho_fila.colagem", "parts")),
        ],
    },
];

fn sections(layout: Layout) -> &'static [SectionSpec] {
    match layout {
        Layout::Shoe => SHOE_SECTIONS,
        Layout::Car => CAR_SECTIONS,
    }
}

/// Human-readable projection of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub heading: &'static str,
    pub lines: Vec<ReportLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    /// Process name, `None` for single-value sections.
    pub label: Option<&'static str>,
    pub value: String,
}

/// Project the fixed metric paths of `layout` out of `result`.
///
/// The response is overlaid on the layout's zero skeleton first, so a
/// missing or non-numeric metric displays as 0.
#[must_use]
pub fn render(layout: Layout, result: &SimulationResult) -> Report {
    let view = overlay(&skeleton(layout), result.as_value());

    let sections = sections(layout)
        .iter()
        .map(|section| ReportSection {
            heading: section.heading,
            lines: section
                .lines
                .iter()
                .map(|spec| ReportLine {
                    label: spec.label,
                    value: display(&view, spec.metric),
                })
                .collect(),
        })
        .collect();

    Report {
        title: format!("Simulation Result ({})", layout.label()),
        sections,
    }
}

fn number_at(view: &Value, path: &str) -> f64 {
    lookup(view, path).and_then(Value::as_f64).unwrap_or(0.0)
}

fn display(view: &Value, metric: Metric) -> String {
    match metric {
        Metric::Count(path) => format!("{} parts", format_number(number_at(view, path))),
        Metric::Fixed(path, unit) => format!("{} {unit}", format_fixed(number_at(view, path))),
        Metric::BusyIdle { busy, idle } => format!(
            "{} min busy, {} min idle",
            format_fixed(number_at(view, busy)),
            format_fixed(number_at(view, idle))
        ),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.heading)?;
            for line in &section.lines {
                match line.label {
                    Some(label) => writeln!(f, "  {label}: {}", line.value)?,
                    None => writeln!(f, "  {}", line.value)?,
                }
            }
        }
        Ok(())
    }
}
