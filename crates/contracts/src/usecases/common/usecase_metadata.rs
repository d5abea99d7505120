/// Метаданные UseCase для идентификации и отображения в UI
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u508")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "resume_chat")
    fn usecase_name() -> &'static str;

    /// Заголовок страницы
    fn display_name() -> &'static str;

    /// Подзаголовок страницы
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u508_resume_chat"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// DOM id корневого элемента страницы: `{full_name}--usecase`
    fn page_id() -> String {
        format!("{}--usecase", Self::full_name())
    }
}
