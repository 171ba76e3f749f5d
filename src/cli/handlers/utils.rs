use crate::model::{CategoryMap, Question};
use colored::Colorize;

pub fn print_question(question: &Question, category_name: Option<&str>) {
    let category = match category_name {
        Some(name) => format!("{} ({})", name, question.category),
        None => question.category.clone(),
    };
    println!(
        "{} {}",
        format!("#{}", question.id).cyan().bold(),
        question.question.bold()
    );
    println!("  Answer:     {}", question.answer.green());
    println!("  Category:   {}", category.blue());
    println!("  Difficulty: {}", difficulty_stars(&question.difficulty));
}

pub fn print_question_list(questions: &[Question], categories: &CategoryMap) {
    if questions.is_empty() {
        println!("No questions found.");
        return;
    }

    for question in questions {
        print_question(question, categories.get(&question.category));
    }
}

/// Difficulty as filled stars; values outside 1..=5 print as-is.
fn difficulty_stars(difficulty: &str) -> String {
    match difficulty.parse::<crate::model::Difficulty>() {
        Ok(d) => {
            let level = usize::from(d.level());
            format!(
                "{}{}",
                "★".repeat(level).yellow(),
                "☆".repeat(5 - level).dimmed()
            )
        }
        Err(_) => difficulty.to_string(),
    }
}
