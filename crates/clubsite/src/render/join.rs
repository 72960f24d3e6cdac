//! The membership form page.

use super::{escape, PageMeta, Renderer};
use crate::error::Error;
use crate::join::{JoinForm, JoinStatus};

impl Renderer<'_> {
    /// `/join` in the form's current state, with an optional validation error.
    #[must_use]
    pub fn join(&self, form: &JoinForm, error: Option<&Error>) -> String {
        let application = form.application();

        let notice = match (form.status(), error) {
            (_, Some(error)) => format!(
                "<div class=\"notice error\" role=\"alert\">{}</div>",
                escape(&error.to_string())
            ),
            (JoinStatus::Success, None) => format!(
                "<div class=\"notice success\" role=\"status\">{}</div>",
                escape(form.status().message().unwrap_or_default())
            ),
            (JoinStatus::Error(_), None) => format!(
                "<div class=\"notice error\" role=\"alert\">{}</div>",
                escape(form.status().message().unwrap_or_default())
            ),
            (JoinStatus::Idle | JoinStatus::Submitting, None) => String::new(),
        };

        let options: String = self
            .catalog
            .groups()
            .iter()
            .map(|group| {
                let selected = if application.group == group.id.as_str() {
                    " selected"
                } else {
                    ""
                };
                format!(
                    "<option value=\"{}\"{selected}>{}</option>",
                    escape(group.id.as_str()),
                    escape(&group.name),
                )
            })
            .collect();

        let button = if *form.status() == JoinStatus::Submitting {
            "<button type=\"submit\" class=\"button\" disabled>Submitting...</button>"
        } else {
            "<button type=\"submit\" class=\"button\">Submit Application</button>"
        };

        let body = format!(
            "<section><h1>Join Our Coding Club</h1>\
             <p class=\"muted\">Become a part of our vibrant community and start your coding journey with us.</p>\
             </section>\
             <section class=\"card\"><h2>Membership Form</h2>{notice}\
             <form class=\"join\" action=\"/join\" method=\"post\">\
             <label for=\"name\">Full Name</label>\
             <input id=\"name\" name=\"name\" type=\"text\" value=\"{name}\" required>\
             <label for=\"email\">Email</label>\
             <input id=\"email\" name=\"email\" type=\"email\" value=\"{email}\" required>\
             <label for=\"group\">Preferred Group</label>\
             <select id=\"group\" name=\"group\"><option value=\"\">Select a group</option>{options}</select>\
             <label for=\"message\">Why do you want to join?</label>\
             <textarea id=\"message\" name=\"message\" rows=\"4\">{message}</textarea>\
             <p>{button}</p>\
             </form></section>",
            name = escape(&application.name),
            email = escape(&application.email),
            message = escape(&application.message),
        );

        let meta = PageMeta::new("Join Us", "Apply to become a club member.", "/join");
        self.document(&meta, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{catalog, site};
    use super::*;
    use crate::join::{JoinApplication, ERROR_MESSAGE, SUCCESS_MESSAGE};

    #[test]
    fn test_blank_form() {
        let site = site();
        let catalog = catalog();
        let html = Renderer::new(&site, &catalog).join(&JoinForm::default(), None);

        assert!(html.contains("Join Our Coding Club"));
        assert!(html.contains("action=\"/join\" method=\"post\""));
        assert!(html.contains("<option value=\"\">Select a group</option>"));
        assert!(html.contains("<option value=\"ai-ml\">AI/ML Group</option>"));
        assert!(!html.contains("class=\"notice"));
    }

    #[test]
    fn test_validation_error_keeps_values() {
        let site = site();
        let catalog = catalog();
        let form = JoinForm::new(JoinApplication {
            name: "Aditi \"A\"".to_string(),
            email: "aditi".to_string(),
            group: "mern-stack".to_string(),
            message: "<hi>".to_string(),
        });
        let error = form.application().validate(&catalog).unwrap_err();

        let html = Renderer::new(&site, &catalog).join(&form, Some(&error));

        assert!(html.contains("value=\"Aditi &quot;A&quot;\""));
        assert!(html.contains("value=\"aditi\""));
        assert!(html.contains("<option value=\"mern-stack\" selected>"));
        assert!(html.contains("&lt;hi&gt;</textarea>"));
        assert!(html.contains("class=\"notice error\""));
        assert!(html.contains("invalid email"));
    }

    #[test]
    fn test_success_notice() {
        let site = site();
        let catalog = catalog();
        let mut form = JoinForm::new(JoinApplication {
            name: "Aditi".to_string(),
            email: "aditi@example.com".to_string(),
            ..JoinApplication::default()
        });
        form.begin(&catalog).unwrap();
        form.finish(Ok(()));

        let html = Renderer::new(&site, &catalog).join(&form, None);

        assert!(html.contains(&escape(SUCCESS_MESSAGE)));
        assert!(html.contains("name=\"name\" type=\"text\" value=\"\""));
    }

    #[test]
    fn test_failure_notice() {
        let site = site();
        let catalog = catalog();
        let mut form = JoinForm::new(JoinApplication {
            name: "Aditi".to_string(),
            email: "aditi@example.com".to_string(),
            ..JoinApplication::default()
        });
        form.begin(&catalog).unwrap();
        form.finish(Err(Error::submission("timeout")));

        let html = Renderer::new(&site, &catalog).join(&form, None);

        assert!(html.contains(ERROR_MESSAGE));
        assert!(html.contains("value=\"Aditi\""));
    }

    #[test]
    fn test_submitting_disables_button() {
        let site = site();
        let catalog = catalog();
        let mut form = JoinForm::new(JoinApplication {
            name: "Aditi".to_string(),
            email: "aditi@example.com".to_string(),
            ..JoinApplication::default()
        });
        form.begin(&catalog).unwrap();

        let html = Renderer::new(&site, &catalog).join(&form, None);
        assert!(html.contains("disabled>Submitting...</button>"));
    }
}
