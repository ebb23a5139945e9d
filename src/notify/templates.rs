use crate::models::ContactMessage;

pub fn contact_subject(message: &ContactMessage) -> String {
    format!("New Contact Form Submission - {}", message.name)
}

pub fn render_contact_notification(message: &ContactMessage) -> String {
    let name = escape_html(&message.name);
    let email = escape_html(&message.email);
    let body = escape_html(&message.message);
    let received = message.created_at.format("%Y-%m-%d %H:%M UTC");
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: #2563eb; color: white; padding: 20px; border-radius: 8px 8px 0 0;">
        <h2 style="margin: 0;">New Contact Form Submission</h2>
    </div>
    <div style="background: #f9fafb; padding: 20px; border: 1px solid #e5e7eb;">
        <p><strong>From:</strong><br>{name}</p>
        <p><strong>Email:</strong><br><a href="mailto:{email}">{email}</a></p>
        <p><strong>Message:</strong></p>
        <div style="padding: 10px; background: white; border-radius: 4px; white-space: pre-wrap;">{body}</div>
    </div>
    <p style="text-align: center; color: #6b7280; font-size: 12px;">Message #{id} received {received} via the portfolio contact form</p>
</body>
</html>"#,
        id = message.id,
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
