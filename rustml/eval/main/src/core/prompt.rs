//! Few-shot chain-of-thought prompting for GSM8K.

/// Instruction placed before the exemplars.
pub const PREAMBLE: &str =
    "As an expert problem solver solve step by step the following mathematical questions.";

/// Default stop sequence: the model starting a new question of its own.
pub const DEFAULT_STOP_SEQUENCE: &str = "\nQ:";

/// Standard 8-shot chain-of-thought exemplars as `(question, answer)` pairs.
pub const FEW_SHOT_EXEMPLARS: [(&str, &str); 8] = [
    (
        "There are 15 trees in the grove. Grove workers will plant trees in the grove today. After they are done, there will be 21 trees. How many trees did the grove workers plant today?",
        "We start with 15 trees. Later we have 21 trees. The difference must be the number of trees they planted. So, they must have planted 21 - 15 = 6 trees. The answer is 6.",
    ),
    (
        "If there are 3 cars in the parking lot and 2 more cars arrive, how many cars are in the parking lot?",
        "There are 3 cars in the parking lot already. 2 more arrive. Now there are 3 + 2 = 5 cars. The answer is 5.",
    ),
    (
        "Leah had 32 chocolates and her sister had 42. If they ate 35, how many pieces do they have left in total?",
        "Leah had 32 chocolates and Leah's sister had 42. That means there were originally 32 + 42 = 74 chocolates. 35 have been eaten. So in total they still have 74 - 35 = 39 chocolates. The answer is 39.",
    ),
    (
        "Jason had 20 lollipops. He gave Denny some lollipops. Now Jason has 12 lollipops. How many lollipops did Jason give to Denny?",
        "Jason had 20 lollipops. Since he only has 12 now, he must have given the rest to Denny. The number of lollipops he has given to Denny must have been 20 - 12 = 8 lollipops. The answer is 8.",
    ),
    (
        "Shawn has five toys. For Christmas, he got two toys each from his mom and dad. How many toys does he have now?",
        "He has 5 toys. He got 2 from mom, so after that he has 5 + 2 = 7 toys. Then he got 2 more from dad, so in total he has 7 + 2 = 9 toys. The answer is 9.",
    ),
    (
        "There were nine computers in the server room. Five more computers were installed each day, from monday to thursday. How many computers are now in the server room?",
        "There are 4 days from monday to thursday. 5 computers were added each day. That means in total 4 * 5 = 20 computers were added. There were 9 computers in the beginning, so now there are 9 + 20 = 29 computers. The answer is 29.",
    ),
    (
        "Michael had 58 golf balls. On tuesday, he lost 23 golf balls. On wednesday, he lost 2 more. How many golf balls did he have at the end of wednesday?",
        "Michael initially had 58 balls. He lost 23 on Tuesday, so after that he has 58 - 23 = 35 balls. On Wednesday he lost 2 more so now he has 35 - 2 = 33 balls. The answer is 33.",
    ),
    (
        "Olivia has $23. She bought five bagels for $3 each. How much money does she have left?",
        "She bought 5 bagels for $3 each. This means she spent 5 * $3 = $15 on the bagels. She had $23 in beginning, so now she has $23 - $15 = $8. The answer is 8.",
    ),
];

/// Build the prompt for `question` with the first `num_shots` exemplars.
///
/// `num_shots` is clamped to the number of available exemplars. The prompt
/// ends with `A:` so the model continues with its worked answer.
pub fn build_prompt(question: &str, num_shots: usize) -> String {
    let shots = num_shots.min(FEW_SHOT_EXEMPLARS.len());
    let mut prompt = String::with_capacity(PREAMBLE.len() + question.len() + shots * 400);
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");
    for (q, a) in &FEW_SHOT_EXEMPLARS[..shots] {
        prompt.push_str("Q: ");
        prompt.push_str(q);
        prompt.push_str("\nA: ");
        prompt.push_str(a);
        prompt.push_str("\n\n");
    }
    prompt.push_str("Q: ");
    prompt.push_str(question);
    prompt.push_str("\nA:");
    prompt
}

/// Cut `response` at the first occurrence of `stop`.
///
/// Few-shot prompted models tend to keep going with a made-up next question;
/// everything from the stop sequence on is dropped. An empty `stop` keeps the
/// whole response.
pub fn truncate_response<'a>(response: &'a str, stop: &str) -> &'a str {
    if stop.is_empty() {
        return response;
    }
    match response.find(stop) {
        Some(pos) => &response[..pos],
        None => response,
    }
}
