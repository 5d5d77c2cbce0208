//! The check cases
//!
//! Each case is one linear script: resolve whatever IDs it needs, issue a
//! single request, then either validate the response against a schema file
//! or compare it to the fixed method-not-allowed payload. Cases share
//! nothing but the read-only context.

use serde_json::{json, Value};

use crate::api::{self, ApiClient};
use crate::common::{Error, Result};
use crate::schema::{self, SchemaStore};

/// Country whose ID seeds the employer and vacancy searches
pub const COUNTRY: &str = "Россия";
/// Region searched for within the country's immediate sub-areas
pub const REGION: &str = "Санкт-Петербург";
/// Employer search text
pub const EMPLOYER_QUERY: &str = "Новые Облачные Технологии";
/// Vacancy search text
pub const VACANCY_QUERY: &str = "QA Automation Engineer";

/// The payload the API returns for a DELETE on any of its endpoints.
///
/// There is no schema for error responses; the check is exact equality,
/// so a change in the API's error shape fails with "values differ" only.
pub fn method_not_allowed() -> Value {
    json!({"errors": [{"type": "method_not_allowed"}]})
}

/// Read-only context shared by all cases
pub struct CaseContext {
    pub client: ApiClient,
    pub schemas: SchemaStore,
}

#[derive(Debug, Clone, Copy)]
enum CaseKind {
    AreasSchema,
    AreasDelete,
    EmployersSchema,
    EmployersDelete,
    VacanciesSchema,
    VacanciesDelete,
}

/// A named case bound to its script
pub struct Case {
    pub name: &'static str,
    pub description: &'static str,
    kind: CaseKind,
}

impl Case {
    /// Run the case to completion; any error fails this case only.
    pub async fn run(&self, ctx: &CaseContext) -> Result<()> {
        match self.kind {
            CaseKind::AreasSchema => areas_schema(ctx).await,
            CaseKind::AreasDelete => areas_delete(ctx).await,
            CaseKind::EmployersSchema => employers_schema(ctx).await,
            CaseKind::EmployersDelete => employers_delete(ctx).await,
            CaseKind::VacanciesSchema => vacancies_schema(ctx).await,
            CaseKind::VacanciesDelete => vacancies_delete(ctx).await,
        }
    }
}

/// The full suite, in execution order.
pub fn all() -> Vec<Case> {
    vec![
        Case {
            name: "areas-schema",
            description: "GET /areas matches the areas schema",
            kind: CaseKind::AreasSchema,
        },
        Case {
            name: "areas-delete",
            description: "DELETE /areas is rejected as method_not_allowed",
            kind: CaseKind::AreasDelete,
        },
        Case {
            name: "employers-schema",
            description: "employer search in Russia matches the employers schema",
            kind: CaseKind::EmployersSchema,
        },
        Case {
            name: "employers-delete",
            description: "DELETE /employers is rejected as method_not_allowed",
            kind: CaseKind::EmployersDelete,
        },
        Case {
            name: "vacancies-schema",
            description: "vacancy search by region and employer matches the vacancies schema",
            kind: CaseKind::VacanciesSchema,
        },
        Case {
            name: "vacancies-delete",
            description: "DELETE /vacancies is rejected as method_not_allowed",
            kind: CaseKind::VacanciesDelete,
        },
    ]
}

async fn areas_schema(ctx: &CaseContext) -> Result<()> {
    let response = ctx.client.get_json("/areas", &[]).await?;
    assert_matches_schema(&ctx.schemas, "schema_areas.json", &response)
}

async fn areas_delete(ctx: &CaseContext) -> Result<()> {
    let response = ctx.client.delete_json("/areas", &[]).await?;
    assert_method_not_allowed(&response)
}

async fn employers_schema(ctx: &CaseContext) -> Result<()> {
    let russia_id = api::resolve_country_id(&ctx.client, COUNTRY).await?;
    let response = ctx
        .client
        .get_json(
            "/employers",
            &[("text", EMPLOYER_QUERY), ("area", &russia_id)],
        )
        .await?;
    assert_matches_schema(&ctx.schemas, "schema_employers.json", &response)
}

async fn employers_delete(ctx: &CaseContext) -> Result<()> {
    let russia_id = api::resolve_country_id(&ctx.client, COUNTRY).await?;
    let response = ctx
        .client
        .delete_json(
            "/employers",
            &[("text", EMPLOYER_QUERY), ("area", &russia_id)],
        )
        .await?;
    assert_method_not_allowed(&response)
}

/// Resolve the region and employer IDs the vacancy search needs:
/// country name -> country ID -> region ID, country ID -> first employer hit.
async fn resolve_vacancy_search(ctx: &CaseContext) -> Result<(String, String)> {
    let russia_id = api::resolve_country_id(&ctx.client, COUNTRY).await?;
    let region_id = api::resolve_region_id(&ctx.client, &russia_id, REGION).await?;
    let employer_id =
        api::resolve_first_employer_id(&ctx.client, EMPLOYER_QUERY, &russia_id).await?;
    Ok((region_id, employer_id))
}

async fn vacancies_schema(ctx: &CaseContext) -> Result<()> {
    let (region_id, employer_id) = resolve_vacancy_search(ctx).await?;
    let response = ctx
        .client
        .get_json(
            "/vacancies",
            &[
                ("text", VACANCY_QUERY),
                ("area", &region_id),
                ("employer_id", &employer_id),
            ],
        )
        .await?;
    assert_matches_schema(&ctx.schemas, "schema_vacancies.json", &response)
}

async fn vacancies_delete(ctx: &CaseContext) -> Result<()> {
    let (region_id, employer_id) = resolve_vacancy_search(ctx).await?;
    let response = ctx
        .client
        .delete_json(
            "/vacancies",
            &[
                ("text", VACANCY_QUERY),
                ("area", &region_id),
                ("employer_id", &employer_id),
            ],
        )
        .await?;
    assert_method_not_allowed(&response)
}

/// Validate `document` against a named schema file, reporting every
/// violation found, not just the first.
pub fn assert_matches_schema(
    schemas: &SchemaStore,
    schema_name: &str,
    document: &Value,
) -> Result<()> {
    let validator = schemas.validator_for(schema_name)?;
    let failures = schema::validation_failures(&validator, document);
    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::Assertion(format!(
            "response does not match {}:\n  - {}",
            schema_name,
            failures.join("\n  - ")
        )))
    }
}

/// Compare a DELETE response to the fixed error payload. Structural
/// equality, so key order never matters; a mismatch shows both values.
pub fn assert_method_not_allowed(response: &Value) -> Result<()> {
    let expected = method_not_allowed();
    if *response == expected {
        Ok(())
    } else {
        Err(Error::Assertion(format!(
            "expected {expected}, got {response}"
        )))
    }
}
