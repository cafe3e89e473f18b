//! Form modes, credential values, and client-side validation.
//!
//! Authentication here is deliberately mocked: a valid submit shows a
//! success toast and redirects, nothing is sent anywhere.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::effects::{Navigator, Notifier};

/// Which variant of the auth form is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    SignIn,
    SignUp,
}

impl FormMode {
    /// Label on the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign in",
            FormMode::SignUp => "Create an Account",
        }
    }

    /// Message shown after a successful submit.
    pub fn success_message(self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign in successfully.",
            FormMode::SignUp => "Account created successfully. Please sign in.",
        }
    }

    /// Route pushed after a successful submit.
    pub fn redirect_target(self) -> &'static str {
        match self {
            FormMode::SignIn => "/",
            FormMode::SignUp => "/sign-in",
        }
    }

    /// Prompt shown next to the counterpart link.
    pub fn footer_prompt(self) -> &'static str {
        match self {
            FormMode::SignIn => "No account yet?",
            FormMode::SignUp => "Have an account already?",
        }
    }

    /// Route of the counterpart form.
    pub fn counterpart_target(self) -> &'static str {
        match self {
            FormMode::SignIn => "/sign-up",
            FormMode::SignUp => "/sign-in",
        }
    }

    /// Label of the counterpart link.
    pub fn counterpart_label(self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign up",
            FormMode::SignUp => "Sign in",
        }
    }
}

/// Raw values captured from the form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// First validation message per field, rendered inline under the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

// One named schema per mode, selected by the `FormMode` discriminant.
// Sign-in never looks at the name field.

#[derive(Debug, Validate)]
struct SignUpSchema {
    #[validate(length(min = 3, message = "Name must be at least 3 characters."))]
    name: String,
    #[validate(email(message = "Enter a valid email address."))]
    email: String,
    #[validate(length(min = 3, message = "Password must be at least 3 characters."))]
    password: String,
}

#[derive(Debug, Validate)]
struct SignInSchema {
    #[validate(email(message = "Enter a valid email address."))]
    email: String,
    #[validate(length(min = 3, message = "Password must be at least 3 characters."))]
    password: String,
}

/// Validate `values` against the schema for `mode`.
pub fn validate_credentials(mode: FormMode, values: &AuthValues) -> Result<(), FieldErrors> {
    let outcome = match mode {
        FormMode::SignUp => SignUpSchema {
            name: values.name.trim().to_string(),
            email: values.email.trim().to_string(),
            password: values.password.clone(),
        }
        .validate(),
        FormMode::SignIn => SignInSchema {
            email: values.email.trim().to_string(),
            password: values.password.clone(),
        }
        .validate(),
    };

    outcome.map_err(|errors| flatten(&errors))
}

fn flatten(errors: &validator::ValidationErrors) -> FieldErrors {
    let fields = errors.field_errors();
    let first = |field: &str| {
        fields.get(field).and_then(|list| list.first()).map(|error| {
            error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("Invalid {field}."))
        })
    };

    FieldErrors {
        name: first("name"),
        email: first("email"),
        password: first("password"),
    }
}

/// Run one submit cycle: validate, then notify and redirect.
///
/// Returns the field errors when validation fails; no side effects run
/// in that case. A rejected navigation is logged and surfaced as an
/// error notification, not a retry.
pub fn submit_credentials(
    mode: FormMode,
    values: &AuthValues,
    notifier: &impl Notifier,
    navigator: &impl Navigator,
) -> Result<(), FieldErrors> {
    validate_credentials(mode, values)?;

    notifier.success(mode.success_message());
    if let Err(e) = navigator.push(mode.redirect_target()) {
        tracing::error!("navigation failed: {e}");
        notifier.error(&format!("There was an error: {e}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::NavigationError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        pushed: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn push(&self, path: &str) -> Result<(), NavigationError> {
            self.pushed.borrow_mut().push(path.to_string());
            Ok(())
        }
    }

    struct FailingNavigator;

    impl Navigator for FailingNavigator {
        fn push(&self, _path: &str) -> Result<(), NavigationError> {
            Err(NavigationError("no history provider".to_string()))
        }
    }

    fn values(name: &str, email: &str, password: &str) -> AuthValues {
        AuthValues {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_sign_up_rejects_short_name() {
        let errors =
            validate_credentials(FormMode::SignUp, &values("An", "a@b.com", "abc")).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_sign_up_requires_email_and_password() {
        let errors = validate_credentials(FormMode::SignUp, &values("Ann", "", "")).unwrap_err();
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
    }

    #[test]
    fn test_sign_in_does_not_require_name() {
        assert!(validate_credentials(FormMode::SignIn, &values("", "a@b.com", "abc")).is_ok());
    }

    #[test]
    fn test_malformed_email_rejected_in_both_modes() {
        for mode in [FormMode::SignIn, FormMode::SignUp] {
            let errors = validate_credentials(mode, &values("Ann", "abc", "abc")).unwrap_err();
            assert!(errors.email.is_some(), "{mode:?} accepted a malformed email");
        }
    }

    #[test]
    fn test_short_password_rejected_in_both_modes() {
        for mode in [FormMode::SignIn, FormMode::SignUp] {
            let errors = validate_credentials(mode, &values("Ann", "a@b.com", "ab")).unwrap_err();
            assert!(errors.password.is_some(), "{mode:?} accepted a short password");
        }
    }

    #[test]
    fn test_valid_sign_up_notifies_and_redirects() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();

        submit_credentials(
            FormMode::SignUp,
            &values("Ann", "a@b.com", "abc"),
            &notifier,
            &navigator,
        )
        .unwrap();

        assert_eq!(
            *notifier.successes.borrow(),
            ["Account created successfully. Please sign in."]
        );
        assert!(notifier.errors.borrow().is_empty());
        assert_eq!(*navigator.pushed.borrow(), ["/sign-in"]);
    }

    #[test]
    fn test_valid_sign_in_notifies_and_redirects() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();

        submit_credentials(
            FormMode::SignIn,
            &values("", "a@b.com", "abc"),
            &notifier,
            &navigator,
        )
        .unwrap();

        assert_eq!(*notifier.successes.borrow(), ["Sign in successfully."]);
        assert_eq!(*navigator.pushed.borrow(), ["/"]);
    }

    #[test]
    fn test_invalid_submit_runs_no_side_effects() {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();

        let result = submit_credentials(
            FormMode::SignUp,
            &values("Ann", "abc", "abc"),
            &notifier,
            &navigator,
        );

        assert!(result.is_err());
        assert!(notifier.successes.borrow().is_empty());
        assert!(notifier.errors.borrow().is_empty());
        assert!(navigator.pushed.borrow().is_empty());
    }

    #[test]
    fn test_navigation_failure_surfaces_error_notification() {
        let notifier = RecordingNotifier::default();

        submit_credentials(
            FormMode::SignIn,
            &values("", "a@b.com", "abc"),
            &notifier,
            &FailingNavigator,
        )
        .unwrap();

        assert_eq!(notifier.successes.borrow().len(), 1);
        let errors = notifier.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("There was an error:"));
        assert!(errors[0].contains("no history provider"));
    }

    #[test]
    fn test_mode_copy() {
        assert_eq!(FormMode::SignIn.submit_label(), "Sign in");
        assert_eq!(FormMode::SignUp.submit_label(), "Create an Account");
        assert_eq!(FormMode::SignIn.redirect_target(), "/");
        assert_eq!(FormMode::SignUp.redirect_target(), "/sign-in");
        assert_eq!(FormMode::SignIn.footer_prompt(), "No account yet?");
        assert_eq!(FormMode::SignUp.footer_prompt(), "Have an account already?");
        assert_eq!(FormMode::SignIn.counterpart_target(), "/sign-up");
        assert_eq!(FormMode::SignUp.counterpart_target(), "/sign-in");
    }
}
