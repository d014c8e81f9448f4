//! Wire shapes sent to the registry, and the pure builders that fill them.
//!
//! No validation happens here. Optional fields are `None` rather than empty
//! strings and are left out of the JSON entirely.

use serde::{Deserialize, Serialize};

use crate::record::{
  Gender, NormalizedEmployeeRecord, SourceCompanyRecord, SourceWorkplaceRecord,
};

/// Register/update body. Dates are epoch milliseconds rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
  pub name:                  String,
  pub cpf:                   String,
  pub admission_date:        String,
  pub effective_date:        String,
  pub external_id:           String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email:                 Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub birth_date:            Option<String>,
  pub ctps:                  String,
  pub series:                String,
  pub pis:                   String,
  pub cellphone:             String,
  pub job_role_description:  String,
  pub gender:                Gender,
  pub intern:                bool,
  pub company_external_id:   String,
  pub workplace_external_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DismissPayload {
  pub external_id:      String,
  pub resignation_date: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
  pub cnpj:             String,
  pub description_name: String,
  pub external_id:      String,
  pub fantasy_name:     String,
  pub social_reason:    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkplacePayload {
  pub external_id: String,
  pub name:        String,
}

impl From<&NormalizedEmployeeRecord> for EmployeePayload {
  fn from(r: &NormalizedEmployeeRecord) -> Self {
    Self {
      name:                  r.name.clone(),
      cpf:                   r.national_id.clone(),
      admission_date:        r.admission_ms.to_string(),
      effective_date:        r.effective_ms.to_string(),
      external_id:           r.external_id.clone(),
      email:                 r.email.clone(),
      birth_date:            r.birth_ms.map(|ms| ms.to_string()),
      ctps:                  r.labor_card_number.clone(),
      series:                r.labor_card_series.clone(),
      pis:                   r.social_security.clone(),
      cellphone:             r.phone.clone(),
      job_role_description:  r.role.clone(),
      gender:                r.gender,
      intern:                r.intern,
      company_external_id:   r.company_id.clone(),
      workplace_external_id: r.workplace_id.clone(),
    }
  }
}

impl DismissPayload {
  pub fn new(external_id: impl Into<String>, resignation_ms: i64) -> Self {
    Self { external_id: external_id.into(), resignation_date: resignation_ms }
  }
}

impl From<&SourceCompanyRecord> for CompanyPayload {
  fn from(c: &SourceCompanyRecord) -> Self {
    Self {
      cnpj:             c.tax_id.clone(),
      description_name: c.legal_name.clone(),
      external_id:      c.external_id.clone(),
      fantasy_name:     c.trade_name.clone(),
      social_reason:    c.legal_name.clone(),
    }
  }
}

impl From<&SourceWorkplaceRecord> for WorkplacePayload {
  fn from(w: &SourceWorkplaceRecord) -> Self {
    Self { external_id: w.external_id.clone(), name: w.name.clone() }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::normalize::{NormalizationPolicy, normalize_employee};
  use crate::record::SourceEmployeeRecord;

  fn source() -> SourceEmployeeRecord {
    SourceEmployeeRecord {
      external_id: "001".into(),
      name: "Maria Souza".into(),
      sex_code: "F".into(),
      national_id: "12345678901".into(),
      role: "ESTAGIÁRIO(A)".into(),
      birth_date: "01/01/1990".into(),
      email: "bad@@".into(),
      admission_date: "10/03/2024".into(),
      phone: "(11) 98888-7777".into(),
      labor_card_number: "1234567".into(),
      labor_card_series: "0010".into(),
      social_security: "12012345678".into(),
      company_id: "7".into(),
      workplace_id: "S01".into(),
      ..Default::default()
    }
  }

  #[test]
  fn employee_payload_wire_shape() {
    let normalized =
      normalize_employee(&source(), &NormalizationPolicy::default()).unwrap();
    let payload = EmployeePayload::from(&normalized);

    assert_eq!(
      serde_json::to_value(&payload).unwrap(),
      json!({
        "name": "Maria Souza",
        "cpf": "12345678901",
        "admissionDate": "1710039600000",
        "effectiveDate": "1710039600000",
        "externalId": "001",
        "birthDate": "631159200000",
        "ctps": "1234567",
        "series": "0010",
        "pis": "12012345678",
        "cellphone": "11988887777",
        "jobRoleDescription": "ESTAGIÁRIO(A)",
        "gender": "FEMININO",
        "intern": true,
        "companyExternalId": "7",
        "workplaceExternalId": "S01",
      })
    );
  }

  #[test]
  fn present_email_is_serialized() {
    let mut rec = source();
    rec.email = " maria@example.com".into();
    rec.sex_code = "M".into();
    let normalized =
      normalize_employee(&rec, &NormalizationPolicy::default()).unwrap();
    let value = serde_json::to_value(EmployeePayload::from(&normalized)).unwrap();
    assert_eq!(value["email"], "maria@example.com");
    assert_eq!(value["gender"], "MASCULINO");
  }

  #[test]
  fn dismiss_date_is_a_number() {
    let value =
      serde_json::to_value(DismissPayload::new("001", 1_746_414_000_000))
        .unwrap();
    assert_eq!(
      value,
      json!({ "externalId": "001", "resignationDate": 1_746_414_000_000_i64 })
    );
  }

  #[test]
  fn company_maps_legal_name_twice() {
    let company = SourceCompanyRecord {
      external_id: "1".into(),
      legal_name:  "ACME LTDA".into(),
      trade_name:  "Acme".into(),
      tax_id:      "11222333000181".into(),
    };
    let value = serde_json::to_value(CompanyPayload::from(&company)).unwrap();
    assert_eq!(
      value,
      json!({
        "cnpj": "11222333000181",
        "descriptionName": "ACME LTDA",
        "externalId": "1",
        "fantasyName": "Acme",
        "socialReason": "ACME LTDA",
      })
    );
  }
}
