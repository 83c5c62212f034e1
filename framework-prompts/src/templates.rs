//! Fixed instruction texts attached to user tasks.
//!
//! Suffix constants start with a newline so that `task + suffix` places the
//! instructions on the line after the task.

/// Appended to the task for step-by-step reasoning.
pub const CHAIN_OF_THOUGHT_INSTRUCTIONS: &str = "
Let's approach this step-by-step:

1. First, identify the key components and requirements
2. Break down the problem into manageable parts
3. Analyze each part systematically
4. Consider relationships and dependencies
5. Synthesize findings into a coherent solution

Provide your reasoning for each step.";

/// Appended to the task for three-branch exploration.
pub const TREE_OF_THOUGHT_INSTRUCTIONS: &str = "
Let's explore multiple approaches to this problem:

Branch 1: Consider the most direct approach
- What is the straightforward solution?
- What are its advantages?
- What are its limitations?

Branch 2: Consider an alternative creative approach
- What's a different way to think about this?
- What unique insights does this provide?
- What trade-offs does this involve?

Branch 3: Consider a hybrid or optimal approach
- Can we combine the best of both previous approaches?
- What would be the most comprehensive solution?
- What makes this approach superior?

Now, evaluate each branch:
- Which branch provides the most robust solution?
- Why is this branch preferable?
- What is your final recommended approach?

Provide your complete reasoning and final answer.";

/// Appended to the task for every self-consistency sample.
pub const SELF_CONSISTENCY_INSTRUCTIONS: &str = "
Please provide your reasoning and answer to this problem. Think through it carefully and explain your thought process.";

/// Worked examples preceding the task in few-shot prompts.
pub const FEW_SHOT_PREAMBLE: &str = "Here are some examples of how to approach similar problems:

Example 1:
Task: Calculate the total cost if I buy 3 apples at $2 each and 2 oranges at $3 each.
Solution: Let me break this down:
- Apples: 3 × $2 = $6
- Oranges: 2 × $3 = $6
- Total: $6 + $6 = $12
Answer: The total cost is $12.

Example 2:
Task: If a train travels 120 miles in 2 hours, what is its average speed?
Solution: To find average speed, I need to divide distance by time:
- Distance: 120 miles
- Time: 2 hours
- Speed = Distance ÷ Time = 120 ÷ 2 = 60 miles per hour
Answer: The average speed is 60 mph.

Now, solve this problem using the same step-by-step approach:
";

/// Closing block of few-shot prompts; rendered after [`FEW_SHOT_PREAMBLE`].
pub const FEW_SHOT_TASK_BLOCK: &str = "
Task: {{task}}

Solution:";

/// Appended to the task for the first reflection call.
pub const REFLECTION_INITIAL_INSTRUCTIONS: &str = "
Please provide your answer to this problem.";

/// Second reflection call: critique of the initial answer.
pub const REFLECTION_CRITIQUE_TEMPLATE: &str = "Task: {{task}}

Here was my initial answer:
{{initial_answer}}

Please critique this answer. Identify its strengths and weaknesses, point out anything that is vague, missing, or incorrect, and explain how it could be improved.";

/// Third reflection call: revision informed by the critique.
pub const REFLECTION_REVISION_TEMPLATE: &str = "Task: {{task}}

Initial answer:
{{initial_answer}}

Critique:
{{critique}}

Based on this critique, please provide an improved, final answer that addresses every weakness identified.";

/// Placeholder shown for the critique step in the reflection preview.
pub const REFLECTION_CRITIQUE_PLACEHOLDER: &str =
    "(After receiving initial answer, critique it for weaknesses)";

/// Placeholder shown for the revision step in the reflection preview.
pub const REFLECTION_REVISION_PLACEHOLDER: &str = "(Based on critique, provide improved answer)";

/// Heading placed before the samples in a consensus prompt.
pub const CONSENSUS_INTRO: &str =
    "I answered this problem several times independently. Here are the answers:";

/// Closing instruction of a consensus prompt.
pub const CONSENSUS_INSTRUCTIONS: &str = "Compare these answers. Identify the reasoning and conclusions they share, resolve any disagreements, and provide a single final answer that reflects the most consistent reasoning.";
