use crate::models::employee::EmployeeColumn;
use crate::store::Store;

/// Dismissible warning box. The message is inserted as-is inside `<pre>`.
pub fn alert(message: &str) -> String {
    format!(
        r#"<div class="alert alert-warning alert-dismissible" role="alert">
    <button aria-label="Close" class="close" data-dismiss="alert" type="button">
        <span aria-hidden="true">&times;</span>
    </button>

    <pre>{}</pre>
</div>"#,
        message
    )
}

/// Fieldset with the four recipient filters, populated from the employee table.
pub fn filters(store: &dyn Store) -> String {
    let statuses = store.employee_distinct(EmployeeColumn::Status);
    let countries = store.employee_distinct(EmployeeColumn::Country);

    let job_titles = resolve_names(
        store.employee_distinct(EmployeeColumn::JobTitle),
        |id| store.job_title_name(id),
        "job title",
    );
    let employment_statuses = resolve_names(
        store.employee_distinct(EmployeeColumn::EmploymentStatus),
        |id| store.employment_status_name(id),
        "employment status",
    );

    let raw = |values: &[String]| -> Vec<(String, String)> {
        values.iter().map(|v| (v.clone(), v.clone())).collect()
    };

    let mut html = String::from(
        "<fieldset>\n    <legend>Filters</legend>\n\n    <div class=\"row form-group\">\n",
    );
    html.push_str(&select("Status", "employee_statuses", &raw(&statuses)));
    html.push_str(&select("Country", "employee_countries", &raw(&countries)));
    html.push_str(&select("Job Title", "employee_job_titles", &job_titles));
    html.push_str(&select(
        "Employment Status",
        "employee_employment_statuses",
        &employment_statuses,
    ));
    html.push_str("    </div>\n</fieldset>\n<hr>");
    html
}

/// One lookup per distinct id; ids without a matching row are left out.
fn resolve_names<F>(ids: Vec<String>, lookup: F, what: &str) -> Vec<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    ids.into_iter()
        .filter_map(|id| match lookup(&id) {
            Some(name) => Some((id, name)),
            None => {
                log::warn!("[sms77] No {} with id {}", what, id);
                None
            }
        })
        .collect()
}

fn select(label: &str, name: &str, options: &[(String, String)]) -> String {
    let mut html = format!(
        "        <label class=\"col-md-3 no-padding\">\n            {}\n            <select class=\"form-control\" name=\"{}\">\n                <option></option>\n",
        label, name
    );
    for (value, text) in options {
        html.push_str(&format!(
            "                <option value=\"{}\">{}</option>\n",
            value, text
        ));
    }
    html.push_str("            </select>\n        </label>\n");
    html
}

pub fn to_input() -> String {
    r#"<div class="form-group">
    <label for="sms77_to">To</label>
    <input class="form-control" id="sms77_to" name="to"/>
</div>"#
        .to_string()
}

pub fn textarea(max_length: u32) -> String {
    format!(
        r#"<div class="form-group">
    <label class="control-label" for="sms77_text">Text</label>
    <textarea class="form-control" id="sms77_text" maxlength="{}" name="text" required rows="5"></textarea>
</div>"#,
        max_length
    )
}

pub fn submit() -> String {
    r#"<div class="form-group">
    <button class="btn btn-info" type="submit">Submit</button>
</div>"#
        .to_string()
}
