// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_lesson_markup(size: usize) -> String {
    let base = "# Lesson\n\nParagraph with some content.\n\nVideo: https://www.youtube.com/watch?v=abc\n\n???\nQuestion:\nWhich of these are even?\n[x] 2\n[ ] 3\n[x] 4\nExplanation:\nEven numbers divide by two.\n???\nJupyter: https://example.com/lab.ipynb\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_course_tree(
    breadth: usize,
    depth: usize,
) -> courseware_engine::Module {
    let mut module = courseware_engine::Module::markdown(format!("Level {depth}"), "");
    if depth > 0 {
        module.children = (0..breadth)
            .map(|_| generate_course_tree(breadth, depth - 1))
            .collect();
    }
    module
}
