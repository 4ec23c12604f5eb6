use crate::models::ContactMessage;

pub fn inbox() -> Vec<ContactMessage> {
    let message = |id, name: &str, email: &str, subject: &str, organization: &str, body: &str| {
        ContactMessage {
            id,
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            organization: organization.to_string(),
            message: body.to_string(),
        }
    };
    vec![
        message(
            1,
            "John Doe",
            "john.doe@example.com",
            "Partnership Inquiry",
            "TechCorp",
            "We are interested in a strategic partnership.",
        ),
        message(
            2,
            "Jane Smith",
            "jane.smith@example.com",
            "Product Feedback",
            "Innovate Inc.",
            "I have some feedback on your latest product release.",
        ),
        message(
            3,
            "Alice Johnson",
            "alice.johnson@example.com",
            "Support Request",
            "HelpDesk",
            "I need assistance with my account.",
        ),
    ]
}
