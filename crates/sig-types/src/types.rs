use serde::{Deserialize, Serialize};

/// A regional public-works information record.
///
/// Dates are stored as `YYYY-MM-DD` strings, exactly as entered. The
/// monetary `value` is an opaque display string ("1.836.017,04 euros",
/// "1,3 milhões de euros", ...) and is never parsed numerically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
    pub description: String,
    pub area: String,
    pub concelho: String,
    pub freguesia: String,
    pub assessor: String,
    pub secretaria: String,
    pub created_at: String,
    pub updated_at: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion_date: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub news: Vec<News>,
}

/// A file or external link attached to a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    File,
    Link,
}

/// An informal press citation attached to a record ("o que se disse").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ativo,
    EmRevisao,
    Arquivado,
}

impl Status {
    /// Display label shown in listings and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Ativo => "Ativo",
            Status::EmRevisao => "Em Revisão",
            Status::Arquivado => "Arquivado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Status::EmRevisao).unwrap(), "\"em_revisao\"");
        assert_eq!(serde_json::to_string(&Status::Ativo).unwrap(), "\"ativo\"");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Ativo.label(), "Ativo");
        assert_eq!(Status::EmRevisao.label(), "Em Revisão");
        assert_eq!(Status::Arquivado.label(), "Arquivado");
    }

    #[test]
    fn test_record_deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": "1700000000000",
            "title": "Requalificação do miradouro",
            "description": "Obras de requalificação.",
            "area": "Infraestruturas",
            "concelho": "Santana",
            "freguesia": "Faial",
            "assessor": "Eng. Rita Nóbrega",
            "secretaria": "Secretaria Regional das Infraestruturas",
            "createdAt": "2024-03-01",
            "updatedAt": "2024-03-01",
            "status": "ativo"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.created_at, "2024-03-01");
        assert!(record.value.is_none());
        assert!(record.attachments.is_empty());
        assert!(record.news.is_empty());
    }
}
