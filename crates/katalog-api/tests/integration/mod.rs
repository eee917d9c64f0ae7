mod detail;
mod listing;
mod seeding;
