//! Fixed demo corpus loaded by the seed route

use super::types::{ContentType, Document};

/// Documents indexed by `POST /seed`
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "Новости компании",
            "Наша компания запустила новый продукт для анализа данных.",
            ContentType::News,
        ),
        Document::new(
            "Как пользоваться приложением",
            "В этом руководстве мы расскажем, как начать работу шаг за шагом.",
            ContentType::Faq,
        ),
        Document::new(
            "Статья о поиске",
            "Поисковые системы используют индексы для быстрого поиска по тексту.",
            ContentType::Article,
        ),
        Document::new(
            "Блог о продуктивности",
            "Несколько советов о том, как повысить продуктивность на работе.",
            ContentType::Blog,
        ),
        Document::new(
            "FAQ: учетная запись",
            "Частые вопросы о восстановлении пароля и настройке профиля.",
            ContentType::Faq,
        ),
    ]
}
