//! 端到端测试：原始章节标记 → 题库提取 → 脚本化测验会话 → 报告

use std::collections::VecDeque;

use anyhow::Result;
use epub_review_quiz::models::{QuestionRecord, SessionReport};
use epub_review_quiz::ui::QuizUi;
use epub_review_quiz::{Config, QuestionExtractor, SessionRunner, TocParser};

/// 脚本化界面：按预先写好的输入驱动整个会话
///
/// 出题顺序是随机的，所以重试/继续策略按提示语区分，
/// 作答按题型（单选/多选）分队列准备。
struct ScriptedUi {
    single_choices: VecDeque<char>,
    multi_choices: VecDeque<Vec<char>>,
    /// 答错后是否再试一次
    retry: bool,
    /// 答对后是否继续下一题
    advance: bool,
    shown_prompts: Vec<String>,
}

impl ScriptedUi {
    fn new() -> Self {
        Self {
            single_choices: VecDeque::new(),
            multi_choices: VecDeque::new(),
            retry: false,
            advance: true,
            shown_prompts: Vec::new(),
        }
    }
}

impl QuizUi for ScriptedUi {
    fn pick(&mut self, _title: &str, _options: &[String]) -> Result<usize> {
        Ok(0)
    }

    fn show(&mut self, _text: &str) {}

    fn show_question(&mut self, _index: usize, _total: usize, record: &QuestionRecord) {
        self.shown_prompts.push(record.prompt.clone());
    }

    fn read_single_choice(&mut self, keys: &[char]) -> Result<char> {
        let key = self.single_choices.pop_front().expect("脚本输入耗尽");
        assert!(keys.contains(&key));
        Ok(key)
    }

    fn read_multi_choice(&mut self, keys: &[char]) -> Result<Vec<char>> {
        let submitted = self.multi_choices.pop_front().expect("脚本输入耗尽");
        assert!(submitted.iter().all(|k| keys.contains(k)));
        Ok(submitted)
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        if prompt.contains("再试") {
            Ok(self.retry)
        } else {
            Ok(self.advance)
        }
    }

    fn show_verdict(&mut self, _correct: bool) {}

    fn show_explanation(&mut self, _record: &QuestionRecord) {}

    fn show_report(&mut self, _report: &SessionReport) {}
}

const CHAPTER_HTML: &str = r#"
    <html><body>
    <p class="body">Chapter review questions follow.</p>
    <p class="ques"><a id="r_1"></a>1. What does a stateful firewall track?</p>
    <p class="alpha">A. MAC addresses</p>
    <p class="alpha">B. Connection state</p>
    <p class="alpha">C. Usernames</p>
    <p class="alpha">D. File hashes</p>
    <p class="ques1"><a id="r_2"></a>2. Which protocols encrypt traffic?</p>
    <p class="alpha">A. Telnet</p>
    <p class="alpha">B. SSH</p>
    <p class="alpha">C. FTP</p>
    <p class="alpha">D. TLS</p>
    <p class="body">Answers appear later in the chapter.</p>
    <p class="ques"><a id="1"></a>1.B.Stateful firewalls keep a connection table.</p>
    <p class="ques1"><a id="2"></a>2.BandD.Both provide encryption in transit.</p>
    </body></html>
"#;

#[test]
fn test_extract_then_run_session_end_to_end() {
    let extraction = QuestionExtractor::new(&Config::default())
        .extract(CHAPTER_HTML)
        .expect("提取章节失败");
    assert_eq!(extraction.bank.len(), 2);
    assert!(extraction.warnings.is_empty());

    let mut ui = ScriptedUi::new();
    // 单选题答错后放弃，多选题乱序提交一次答对
    ui.single_choices.push_back('A');
    ui.multi_choices.push_back(vec!['D', 'B']);

    let report = SessionRunner::new()
        .run(&mut ui, &extraction.bank)
        .expect("会话运行失败");

    assert_eq!(report.total, 2);
    assert_eq!(report.answered, 2);
    assert_eq!(report.score, 1);
    assert_eq!(report.missed.len(), 1);
    // 两道题都展示过，顺序随机但集合固定
    assert_eq!(ui.shown_prompts.len(), 2);

    let missed = &report.missed[0];
    assert_eq!(missed.prompt, "What does a stateful firewall track?");
    assert_eq!(
        missed.explanation,
        "Stateful firewalls keep a connection table."
    );
    let guessed: Vec<char> = missed
        .choices
        .iter()
        .filter(|c| c.guessed)
        .map(|c| c.key)
        .collect();
    assert_eq!(guessed, vec!['A']);
    let correct: Vec<char> = missed
        .choices
        .iter()
        .filter(|c| c.correct)
        .map(|c| c.key)
        .collect();
    assert_eq!(correct, vec!['B']);
}

#[test]
fn test_malformed_answer_still_quizzes_other_records() {
    let html = r#"
        <p class="ques"><a id="r_1"></a>1. Question with broken answer?</p>
        <p class="alpha">A. Something</p>
        <p class="ques"><a id="1"></a>not a parseable answer</p>
        <p class="ques"><a id="r_2"></a>2. Question with good answer?</p>
        <p class="alpha">A. Yes</p>
        <p class="alpha">B. No</p>
        <p class="ques"><a id="2"></a>2.A.Yes indeed.</p>
    "#;

    let extraction = QuestionExtractor::new(&Config::default())
        .extract(html)
        .unwrap();
    assert_eq!(extraction.bank.len(), 2);
    assert_eq!(extraction.warnings.len(), 1);

    // 坏答案的题目留在题库里，任何作答都判错；好题照常得分
    let mut ui = ScriptedUi::new();
    ui.single_choices.push_back('A');
    ui.single_choices.push_back('A');

    let report = SessionRunner::new().run(&mut ui, &extraction.bank).unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.answered, 2);
    assert_eq!(report.score, 1);
    assert_eq!(report.missed.len(), 1);
    assert_eq!(report.missed[0].prompt, "Question with broken answer?");
}

#[test]
fn test_toc_feeds_chapter_selection_order() {
    let index_html = r#"
        <a href="cover.xhtml#cover">Cover</a>
        <a href="part1.xhtml#part1">Part I Network Security</a>
        <a href="ch01.xhtml#ch01">Chapter 1 Firewalls</a>
        <a href="ch02.xhtml#ch02">Chapter 2 VPNs</a>
        <a href="part9.xhtml#part9">Part IX Empty Appendix</a>
    "#;

    let toc = TocParser::new().parse(index_html).unwrap();
    assert_eq!(toc.parts.len(), 1);

    let chapters: Vec<_> = toc.parts[0].chapters.keys().cloned().collect();
    assert_eq!(chapters, vec!["Chapter 1 Firewalls", "Chapter 2 VPNs"]);
    assert_eq!(toc.parts[0].chapters["Chapter 1 Firewalls"], "ch01.xhtml");
}
