use std::collections::BTreeMap;

use crate::store::Store;

/// Form fields that narrow the employees used as recipients, paired with the
/// employee column each one constrains. Order is the order clauses are appended.
pub const FILTERS: [(&str, &str); 4] = [
    (EMPLOYEE_COUNTRIES, "country"),
    (EMPLOYEE_EMPLOYMENT_STATUSES, "employment_status"),
    (EMPLOYEE_JOB_TITLES, "job_title"),
    (EMPLOYEE_STATUSES, "status"),
];

pub const EMPLOYEE_COUNTRIES: &str = "employee_countries";
pub const EMPLOYEE_EMPLOYMENT_STATUSES: &str = "employee_employment_statuses";
pub const EMPLOYEE_JOB_TITLES: &str = "employee_job_titles";
pub const EMPLOYEE_STATUSES: &str = "employee_statuses";

const HAS_PHONE: &str = "mobile_phone IS NOT NULL and mobile_phone <> ''";

/// Names of all filter form fields.
pub fn filter_fields() -> impl Iterator<Item = &'static str> {
    FILTERS.iter().map(|(field, _)| *field)
}

/// Builds the employee predicate and its bind values from the submitted filters.
/// Empty or absent filters add no clause; the phone constraint is always last.
pub fn build_predicate(fields: &BTreeMap<String, String>) -> (String, Vec<String>) {
    let mut clauses: Vec<String> = Vec::new();
    let mut bind: Vec<String> = Vec::new();

    for (field, column) in FILTERS {
        let value = fields.get(field).map(String::as_str).unwrap_or("");
        if !value.is_empty() {
            clauses.push(format!("{} in (?)", column));
            bind.push(value.to_string());
        }
    }
    clauses.push(HAS_PHONE.to_string());

    (clauses.join(" and "), bind)
}

/// Phone numbers to message.
///
/// A non-empty `to` wins and is split on commas as typed. Otherwise the filters
/// select employees; with no filters that means every employee with a phone.
pub fn resolve(fields: &BTreeMap<String, String>, store: &dyn Store) -> Vec<String> {
    let to = fields.get("to").map(String::as_str).unwrap_or("");
    if !to.is_empty() {
        return to.split(',').map(str::to_string).collect();
    }

    let (predicate, bind) = build_predicate(fields);
    log::debug!("[sms77] Resolving recipients where {} {:?}", predicate, bind);

    match store.employee_find(&predicate, &bind) {
        Ok(employees) => employees
            .into_iter()
            .filter_map(|e| e.mobile_phone)
            .collect(),
        Err(e) => {
            log::warn!("[sms77] Employee lookup failed: {}", e);
            vec![]
        }
    }
}
