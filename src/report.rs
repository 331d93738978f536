//! Payload handed to the narrative-report collaborator and handling of its reply.
//!
//! The collaborator is an external service; this module only builds its
//! request body and maps the HTTP envelope of its answer to text that is
//! shown to the user as is. The crate never calls the collaborator itself:
//! [`ReportReply::from_http`] is library API for the client that does.

use serde::{Deserialize, Serialize};

use crate::finance::decision::Decision;
use crate::finance::types::ProjectionResult;

/// Metrics sent to the collaborator. Field names are part of its contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetrics {
    /// New plant capex.
    #[serde(rename = "Cplant")]
    pub c_plant: f64,
    /// Smart-grid capex.
    #[serde(rename = "Csmart")]
    pub c_smart: f64,
    /// Annual plant revenue.
    #[serde(rename = "Rplant")]
    pub r_plant: f64,
    /// Annual smart-grid savings.
    #[serde(rename = "revenuesmart")]
    pub revenue_smart: f64,
    /// Plant ROI over the lifespan (%).
    #[serde(rename = "ROIplant")]
    pub roi_plant: f64,
    /// Smart-grid ROI over the lifespan (%).
    #[serde(rename = "ROIsmart")]
    pub roi_smart: f64,
    /// Plant NPV over the lifespan.
    #[serde(rename = "NPVplant")]
    pub npv_plant: f64,
    /// Smart-grid NPV over the lifespan.
    #[serde(rename = "NPVsmart")]
    pub npv_smart: f64,
    /// Recommendation text; derived from the figures when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
}

impl ReportMetrics {
    /// The recommendation text, derived with [`Decision::select`] when the
    /// payload did not carry one.
    pub fn resolved_decision(&self) -> String {
        match &self.decision {
            Some(text) if !text.is_empty() => text.clone(),
            _ => Decision::select(self.npv_plant, self.roi_plant, self.npv_smart, self.roi_smart)
                .text()
                .to_string(),
        }
    }
}

impl From<&ProjectionResult> for ReportMetrics {
    fn from(r: &ProjectionResult) -> Self {
        Self {
            c_plant: r.plant_capex,
            c_smart: r.smart_grid_capex,
            r_plant: r.annual_plant_revenue,
            revenue_smart: r.annual_smart_savings,
            roi_plant: r.roi_plant,
            roi_smart: r.roi_smart,
            npv_plant: r.npv_plant,
            npv_smart: r.npv_smart,
            decision: Some(r.decision.text().to_string()),
        }
    }
}

/// Request body: `{"metrics": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Metrics for the report.
    pub metrics: ReportMetrics,
}

impl ReportRequest {
    /// Fills in the decision text from the figures when it is missing or empty.
    pub fn with_resolved_decision(mut self) -> Self {
        self.metrics.decision = Some(self.metrics.resolved_decision());
        self
    }
}

impl From<&ProjectionResult> for ReportRequest {
    fn from(r: &ProjectionResult) -> Self {
        Self {
            metrics: ReportMetrics::from(r),
        }
    }
}

/// What the user sees after the collaborator answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportReply {
    /// Narrative report (HTML fragment, rendered as is).
    Report(String),
    /// Message describing why no report is available.
    Failed(String),
}

#[derive(Deserialize)]
struct ReplyBody {
    #[serde(default)]
    report: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ReportReply {
    /// Maps the collaborator's HTTP response to a reply.
    ///
    /// Non-success statuses, non-JSON content and malformed JSON become
    /// [`ReportReply::Failed`] carrying the raw body. A JSON body with an
    /// `error` field wins over a `report` field.
    pub fn from_http(status: u16, content_type: &str, body: &str) -> Self {
        if !(200..300).contains(&status) {
            return Self::Failed(format!("Error {status}: {body}"));
        }
        if !content_type.contains("application/json") {
            return Self::Failed(format!("Non-JSON response: {body}"));
        }
        let parsed: ReplyBody = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(_) => return Self::Failed(format!("Invalid JSON response: {body}")),
        };
        match (parsed.error, parsed.report) {
            (Some(error), _) if !error.is_empty() => Self::Failed(error),
            (_, Some(report)) => Self::Report(report),
            _ => Self::Failed(format!("Invalid JSON response: {body}")),
        }
    }

    /// Text to surface to the user, verbatim.
    pub fn text(&self) -> &str {
        match self {
            Self::Report(s) | Self::Failed(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ReportMetrics {
        ReportMetrics {
            c_plant: 100.0,
            c_smart: 50.0,
            r_plant: 10.0,
            revenue_smart: 20.0,
            roi_plant: 5.0,
            roi_smart: 15.0,
            npv_plant: -10.0,
            npv_smart: 30.0,
            decision: None,
        }
    }

    #[test]
    fn metrics_use_collaborator_field_names() {
        let json = serde_json::to_value(ReportRequest { metrics: metrics() }).ok();
        let json = json.unwrap_or_default();
        let m = &json["metrics"];
        for key in [
            "Cplant",
            "Csmart",
            "Rplant",
            "revenuesmart",
            "ROIplant",
            "ROIsmart",
            "NPVplant",
            "NPVsmart",
        ] {
            assert!(m.get(key).is_some(), "missing {key}");
        }
        assert!(m.get("decision").is_none());
    }

    #[test]
    fn missing_decision_is_derived() {
        assert_eq!(
            metrics().resolved_decision(),
            Decision::SmartGridPreferred.text()
        );
        let given = ReportMetrics {
            decision: Some("keep".to_string()),
            ..metrics()
        };
        assert_eq!(given.resolved_decision(), "keep");
    }

    #[test]
    fn request_without_decision_gets_one() {
        let json = r#"{"metrics": {"Cplant": 100, "Csmart": 50, "Rplant": 10, "revenuesmart": 20,
            "ROIplant": 5, "ROIsmart": 15, "NPVplant": -10, "NPVsmart": 30}}"#;
        let request: Result<ReportRequest, _> = serde_json::from_str(json);
        assert!(request.is_ok(), "{:?}", request.err());
        let Ok(request) = request else { return };
        let resolved = request.with_resolved_decision();
        assert_eq!(
            resolved.metrics.decision.as_deref(),
            Some(Decision::SmartGridPreferred.text())
        );
    }

    #[test]
    fn reply_report() {
        let reply = ReportReply::from_http(200, "application/json; charset=utf-8", r#"{"report":"<p>ok</p>"}"#);
        assert_eq!(reply, ReportReply::Report("<p>ok</p>".to_string()));
        assert_eq!(reply.text(), "<p>ok</p>");
    }

    #[test]
    fn reply_error_status() {
        let reply = ReportReply::from_http(500, "application/json", "boom");
        assert_eq!(reply, ReportReply::Failed("Error 500: boom".to_string()));
    }

    #[test]
    fn reply_non_json() {
        let reply = ReportReply::from_http(200, "text/html", "<html>");
        assert_eq!(reply.text(), "Non-JSON response: <html>");
    }

    #[test]
    fn reply_invalid_json() {
        let reply = ReportReply::from_http(200, "application/json", "{oops");
        assert_eq!(reply.text(), "Invalid JSON response: {oops");
    }

    #[test]
    fn reply_error_field() {
        let reply = ReportReply::from_http(
            200,
            "application/json",
            r#"{"error":"Report generation failed"}"#,
        );
        assert_eq!(reply, ReportReply::Failed("Report generation failed".to_string()));
    }
}
